// src/clipboard.rs

use arboard::Clipboard;

use crate::error::Result;
use crate::host::ClipboardWriter;

/// 系统剪贴板；每次写入时临时打开
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }
}
