//! 分享链接

use qrcode::render::unicode;
use qrcode::QrCode;
use serde::{Deserialize, Serialize};

use super::ProxyKind;
use crate::error::{CoreError, CoreResult};

/// 某个代理的客户端导入链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    pub proxy: ProxyKind,
    pub url: String,
}

impl ShareLink {
    /// 以终端字符渲染二维码
    pub fn qr_text(&self) -> CoreResult<String> {
        let code = QrCode::new(self.url.as_bytes())
            .map_err(|e| CoreError::SerializationError(format!("QR encoding failed: {e}")))?;
        Ok(code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .quiet_zone(true)
            .build())
    }
}
