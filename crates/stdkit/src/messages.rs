//! Collecting user-facing messages on an object, and validators that
//! report through them.

/// Types that collect messages, e.g. validation feedback.
///
/// Implementors expose their message list; the rest is provided.
///
/// ```
/// use stdkit::{MessageContainer, Messages};
///
/// let mut messages = Messages::default();
/// messages
///     .add_message("value is required")
///     .add_message(format!("must be at most {} characters", 64));
///
/// assert!(messages.has_messages());
/// assert_eq!(messages.messages().len(), 2);
/// ```
pub trait MessageContainer {
    fn messages(&self) -> &[String];

    fn messages_mut(&mut self) -> &mut Vec<String>;

    /// Returns whether there are any messages.
    fn has_messages(&self) -> bool {
        !self.messages().is_empty()
    }

    /// Adds a single message.
    fn add_message(&mut self, message: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.messages_mut().push(message.into());
        self
    }

    /// Replaces all messages with `messages`.
    fn set_messages<I, M>(&mut self, messages: I) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        let list = self.messages_mut();
        list.clear();
        list.extend(messages.into_iter().map(Into::into));
        self
    }

    /// Drops all messages.
    fn clear_messages(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.messages_mut().clear();
        self
    }
}

/// A plain message list implementing [`MessageContainer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    messages: Vec<String>,
}

impl MessageContainer for Messages {
    fn messages(&self) -> &[String] {
        &self.messages
    }

    fn messages_mut(&mut self) -> &mut Vec<String> {
        &mut self.messages
    }
}

/// Checks values, explaining failures through its messages.
///
/// ```
/// use stdkit::{MessageContainer, Messages, Validator};
///
/// struct Required(Messages);
///
/// impl MessageContainer for Required {
///     fn messages(&self) -> &[String] {
///         self.0.messages()
///     }
///
///     fn messages_mut(&mut self) -> &mut Vec<String> {
///         self.0.messages_mut()
///     }
/// }
///
/// impl Validator<str> for Required {
///     fn is_valid(&mut self, value: &str) -> bool {
///         self.clear_messages();
///         if value.is_empty() {
///             self.add_message("value is required");
///         }
///         !self.has_messages()
///     }
/// }
///
/// let mut required = Required(Messages::default());
/// assert!(!required.is_valid(""));
/// assert_eq!(required.messages(), ["value is required"]);
/// ```
pub trait Validator<V: ?Sized>: MessageContainer {
    /// Returns whether `value` is valid. On failure the reasons are left in
    /// [`messages`](MessageContainer::messages).
    fn is_valid(&mut self, value: &V) -> bool;
}
