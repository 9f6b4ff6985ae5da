//! What the host hands the dialog on every render.

use ratatui::text::Text;
use std::fmt;
use thiserror::Error;

use super::severity::Severity;

pub const DEFAULT_CONFIRM_LABEL: &str = "Accept";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";

/// Error raised by a host-supplied action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CallbackError {
    message: String,
}

impl CallbackError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Side effect bound to a dialog button. Runs against the host context `H`.
pub type ActionFn<H> = Box<dyn FnOnce(&mut H) -> Result<(), CallbackError>>;

/// A button the host wants rendered, optionally bound to an action.
pub struct DialogAction<H> {
    pub label: Option<String>,
    pub on_invoke: Option<ActionFn<H>>,
}

impl<H> DialogAction<H> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            on_invoke: None,
        }
    }

    /// Button with the default label and no action.
    pub fn unlabeled() -> Self {
        Self {
            label: None,
            on_invoke: None,
        }
    }

    pub fn on_invoke<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut H) -> Result<(), CallbackError> + 'static,
    {
        self.on_invoke = Some(Box::new(action));
        self
    }

    fn label_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or(default)
    }
}

impl<H> fmt::Debug for DialogAction<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogAction")
            .field("label", &self.label)
            .field("on_invoke", &self.on_invoke.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Body text: plain string or pre-styled text.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogMessage {
    Plain(String),
    Styled(Text<'static>),
}

impl From<String> for DialogMessage {
    fn from(value: String) -> Self {
        DialogMessage::Plain(value)
    }
}

impl From<&str> for DialogMessage {
    fn from(value: &str) -> Self {
        DialogMessage::Plain(value.to_string())
    }
}

impl From<Text<'static>> for DialogMessage {
    fn from(value: Text<'static>) -> Self {
        DialogMessage::Styled(value)
    }
}

/// Everything the dialog needs to render one frame and dispatch one gesture.
///
/// Built by the host, consumed by the dialog. `visible` belongs to the host;
/// the dialog never changes it and reports closing through `on_close`.
pub struct DialogRequest<H> {
    pub visible: bool,
    pub severity: Severity,
    pub title: Option<String>,
    pub message: Option<DialogMessage>,
    /// Custom body. Takes precedence over `message`.
    pub content: Option<Text<'static>>,
    pub dismiss_on_backdrop: bool,
    pub confirm: Option<DialogAction<H>>,
    pub cancel: Option<DialogAction<H>>,
}

impl<H> Default for DialogRequest<H> {
    fn default() -> Self {
        Self {
            visible: false,
            severity: Severity::Info,
            title: None,
            message: None,
            content: None,
            dismiss_on_backdrop: true,
            confirm: None,
            cancel: None,
        }
    }
}

impl<H> fmt::Debug for DialogRequest<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogRequest")
            .field("visible", &self.visible)
            .field("severity", &self.severity)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("content", &self.content.is_some())
            .field("dismiss_on_backdrop", &self.dismiss_on_backdrop)
            .field("confirm", &self.confirm)
            .field("cancel", &self.cancel)
            .finish()
    }
}

impl<H> DialogRequest<H> {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            ..Self::default()
        }
    }

    pub fn severity(mut self, severity: impl Into<Severity>) -> Self {
        self.severity = severity.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<DialogMessage>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn content(mut self, content: impl Into<Text<'static>>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn dismiss_on_backdrop(mut self, dismiss: bool) -> Self {
        self.dismiss_on_backdrop = dismiss;
        self
    }

    pub fn confirm(mut self, action: DialogAction<H>) -> Self {
        self.confirm = Some(action);
        self
    }

    pub fn cancel(mut self, action: DialogAction<H>) -> Self {
        self.cancel = Some(action);
        self
    }

    /// Explicit title, or the severity's default when absent or empty.
    pub fn resolved_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(self.severity.theme().default_title)
    }

    pub fn confirm_label(&self) -> &str {
        match &self.confirm {
            Some(action) => action.label_or(DEFAULT_CONFIRM_LABEL),
            None => DEFAULT_CONFIRM_LABEL,
        }
    }

    /// Cancel label, or `None` when no cancel button is rendered.
    pub fn cancel_label(&self) -> Option<&str> {
        self.cancel
            .as_ref()
            .map(|action| action.label_or(DEFAULT_CANCEL_LABEL))
    }

    pub fn has_cancel(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn body(&self) -> Text<'static> {
        if let Some(content) = &self.content {
            return content.clone();
        }
        match &self.message {
            Some(DialogMessage::Plain(text)) => Text::raw(text.clone()),
            Some(DialogMessage::Styled(text)) => text.clone(),
            None => Text::default(),
        }
    }
}
