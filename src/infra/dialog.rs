//! # Selection Dialog Module / 选择对话框模块
//!
//! Presents the registered configurations to the user and returns exactly
//! one choice or a cancellation. The prompt itself is modal and runs on its
//! own thread (the UI execution context); the hand-off cell carries the
//! terminal event back to the blocked calling thread, turning the
//! asynchronous interaction into a synchronous value.
//!
//! 向用户展示已注册的配置并返回恰好一个选择或一次取消。
//! 提示本身是模态的并运行在自己的线程上（UI 执行上下文）；
//! 交接单元将终止事件传回被阻塞的调用线程，
//! 把异步交互转化为同步的值。

use crate::core::error::InvocationError;
use crate::core::handoff::HandoffCell;
use crate::core::models::ConfigurationDescriptor;
use crate::core::resolver::SelectConfiguration;
use dialoguer::{theme::ColorfulTheme, Select};
use rust_i18n::t;
use std::sync::Arc;
use std::thread;

/// The interactive selector backed by a terminal prompt.
/// 由终端提示支撑的交互式选择器。
pub struct DialogSelector {
    locale: String,
}

impl DialogSelector {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

impl SelectConfiguration for DialogSelector {
    fn select(
        &self,
        candidates: &[ConfigurationDescriptor],
    ) -> Result<ConfigurationDescriptor, InvocationError> {
        let cell = Arc::new(HandoffCell::new());
        let dialog_cell = Arc::clone(&cell);

        let prompt = t!("dialog_select_configuration", locale = &self.locale).to_string();
        let items: Vec<String> = candidates
            .iter()
            .map(|candidate| format!("{} ({})", candidate.name, candidate.capability_tag))
            .collect();
        let owned: Vec<ConfigurationDescriptor> = candidates.to_vec();

        // The prompt owns its thread for the duration of the dialog; its
        // single terminal event (choice or dismissal) goes through the cell.
        thread::spawn(move || {
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .items(&items)
                .default(0)
                .interact_opt()
                .ok()
                .flatten();

            dialog_cell.put(choice.map(|index| owned[index].clone()));
        });

        cell.take().ok_or(InvocationError::SelectionCancelled)
    }
}

/// The selector for contexts that cannot present a dialog (no terminal):
/// surfaces the exact "no run configuration selected" contract instead of
/// prompting.
///
/// 用于无法展示对话框（没有终端）的上下文的选择器：
/// 不进行提示，而是呈现精确的“未选择运行配置”契约。
pub struct NullSelector;

impl SelectConfiguration for NullSelector {
    fn select(
        &self,
        _candidates: &[ConfigurationDescriptor],
    ) -> Result<ConfigurationDescriptor, InvocationError> {
        Err(InvocationError::NoRunConfigurationSelected)
    }
}
