//! QR code rendering
//!
//! Available with the `qr` feature. Without it every render reports
//! `FeatureUnavailable` and the UI disables the QR control.

use crate::errors::{LinkshelfError, Result};

/// 网页中二维码的最小边长（像素）
pub const QR_SIZE_PX: u32 = 150;

#[derive(Debug, Clone, Copy, Default)]
pub struct QrRenderer;

impl QrRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Whether this build can render QR codes at all
    pub fn is_available(&self) -> bool {
        cfg!(feature = "qr")
    }

    #[cfg(feature = "qr")]
    pub fn render_svg(&self, value: &str) -> Result<String> {
        use qrcode::render::svg;
        use qrcode::{EcLevel, QrCode};

        let code = QrCode::with_error_correction_level(value.as_bytes(), EcLevel::H)
            .map_err(|e| LinkshelfError::validation(format!("Cannot encode QR code: {}", e)))?;

        Ok(code
            .render::<svg::Color>()
            .min_dimensions(QR_SIZE_PX, QR_SIZE_PX)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .quiet_zone(true)
            .build())
    }

    /// 终端渲染（每个字符两行模块）
    #[cfg(feature = "qr")]
    pub fn render_terminal(&self, value: &str) -> Result<String> {
        use qrcode::render::unicode;
        use qrcode::{EcLevel, QrCode};

        let code = QrCode::with_error_correction_level(value.as_bytes(), EcLevel::M)
            .map_err(|e| LinkshelfError::validation(format!("Cannot encode QR code: {}", e)))?;

        Ok(code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .quiet_zone(true)
            .build())
    }

    #[cfg(not(feature = "qr"))]
    pub fn render_svg(&self, _value: &str) -> Result<String> {
        Err(unavailable())
    }

    #[cfg(not(feature = "qr"))]
    pub fn render_terminal(&self, _value: &str) -> Result<String> {
        Err(unavailable())
    }
}

#[cfg(not(feature = "qr"))]
fn unavailable() -> LinkshelfError {
    LinkshelfError::feature_unavailable("QR code support is not compiled into this build")
}
