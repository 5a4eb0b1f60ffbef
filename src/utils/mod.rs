pub mod url_validator;

pub use url_validator::{accept_url, accept_url_with, is_valid_http_url};

const BASE36_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 将非负整数编码为小写 base36
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    // 只包含 ASCII 字符
    String::from_utf8(buf).unwrap_or_default()
}

/// 根据创建时间（毫秒）生成链接 ID
///
/// `taken` 返回 true 时说明 ID 已被占用，时间戳向后推 1ms 重试。
pub fn generate_link_id<F>(created_at_millis: i64, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut millis = created_at_millis.max(0) as u64;
    loop {
        let id = to_base36(millis);
        if !taken(&id) {
            return id;
        }
        millis = millis.saturating_add(1);
    }
}

/// 转义 HTML 文本与属性值
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
