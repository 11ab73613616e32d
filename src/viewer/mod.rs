//! 产物查看器
//!
//! 在两份生成产物之间切换展示，支持复制到剪贴板与按约定
//! 文件名保存。只持有瞬态界面状态（当前标签页、限时的
//! "已复制"回执），产物本身由生成器派生。

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use arboard::Clipboard;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::latex::{CLASS_FILE_NAME, MAIN_FILE_NAME};
use crate::models::exam::GeneratedFiles;

/// 当前展示的产物标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTab {
    /// examtemplate.cls
    Class,
    /// main.tex
    Main,
}

impl OutputTab {
    /// 另一个标签页
    pub fn other(self) -> Self {
        match self {
            OutputTab::Class => OutputTab::Main,
            OutputTab::Main => OutputTab::Class,
        }
    }
}

/// 产物查看器
pub struct OutputViewer {
    files: GeneratedFiles,
    active: OutputTab,
    copied_at: Option<Instant>,
}

impl OutputViewer {
    /// 创建查看器，默认展示主文档标签页
    pub fn new(files: GeneratedFiles) -> Self {
        Self {
            files,
            active: OutputTab::Main,
            copied_at: None,
        }
    }

    /// 配置变化后刷新产物（查看器不自己派生内容）
    pub fn update_files(&mut self, files: GeneratedFiles) {
        self.files = files;
    }

    pub fn active_tab(&self) -> OutputTab {
        self.active
    }

    /// 切换到指定标签页
    pub fn switch(&mut self, tab: OutputTab) {
        self.active = tab;
    }

    /// 在两个标签页之间切换
    pub fn toggle(&mut self) {
        self.active = self.active.other();
    }

    /// 当前标签页的文本
    pub fn active_text(&self) -> &str {
        match self.active {
            OutputTab::Class => &self.files.class_text,
            OutputTab::Main => &self.files.main_text,
        }
    }

    /// 当前标签页的约定文件名
    pub fn file_name(&self) -> &'static str {
        match self.active {
            OutputTab::Class => CLASS_FILE_NAME,
            OutputTab::Main => MAIN_FILE_NAME,
        }
    }

    /// 把当前文本写入系统剪贴板
    ///
    /// 只产生副作用，成功与否通过日志与"已复制"回执体现。
    pub fn copy_to_clipboard(&mut self) -> AppResult<()> {
        let mut clipboard =
            Clipboard::new().map_err(|e| AppError::clipboard_failed(e))?;
        clipboard
            .set_text(self.active_text().to_string())
            .map_err(|e| AppError::clipboard_failed(e))?;

        self.copied_at = Some(Instant::now());
        info!("已复制 {} 到剪贴板", self.file_name());
        Ok(())
    }

    /// "已复制"回执是否仍在展示期内
    pub fn copied_recently(&self, ttl: Duration) -> bool {
        self.copied_at
            .map(|at| at.elapsed() < ttl)
            .unwrap_or(false)
    }

    /// 把当前文本按约定文件名保存到指定目录
    pub fn save_to(&self, dir: &Path) -> AppResult<PathBuf> {
        std::fs::create_dir_all(dir)
            .map_err(|e| AppError::file_write_failed(dir.display().to_string(), e))?;

        let path = dir.join(self.file_name());
        std::fs::write(&path, self.active_text())
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        debug!("已保存 {}", path.display());
        Ok(path)
    }
}
