//! Contact and newsletter dialogs.
//!
//! Delivery is simulated: a submit waits [`SUBMIT_DELAY`], shows the
//! success panel for [`CLOSE_DELAY`], then clears the fields and asks the
//! caller to close the dialog. Time is passed in so the flow is testable.

use std::time::{Duration, Instant};

use thiserror::Error;

pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
pub const CLOSE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("กรุณากรอก{0}")]
    Missing(&'static str),
    #[error("รูปแบบอีเมลไม่ถูกต้อง")]
    InvalidEmail,
    #[error("กำลังส่งข้อมูลอยู่")]
    Busy,
}

/// Shape of an `<input type="email">` value: one `@`, non-empty local part,
/// dot-separated non-empty domain labels, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Field set behind one dialog.
pub trait FormFields {
    fn validate(&self) -> Result<(), FormError>;
    fn clear(&mut self);
    /// One-line description for the delivery log.
    fn summary(&self) -> String;
}

fn require(value: &str, label: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(label))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields for ContactForm {
    fn validate(&self) -> Result<(), FormError> {
        require(&self.name, "ชื่อ")?;
        require(&self.email, "อีเมล")?;
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        require(&self.message, "ข้อความ")
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn summary(&self) -> String {
        format!(
            "contact from {} <{}> ({} chars)",
            self.name.trim(),
            self.email.trim(),
            self.message.chars().count()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscribeForm {
    pub email: String,
}

impl FormFields for SubscribeForm {
    fn validate(&self) -> Result<(), FormError> {
        require(&self.email, "อีเมล")?;
        if is_valid_email(&self.email) {
            Ok(())
        } else {
            Err(FormError::InvalidEmail)
        }
    }

    fn clear(&mut self) {
        self.email.clear();
    }

    fn summary(&self) -> String {
        format!("newsletter signup <{}>", self.email.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting { since: Instant },
    Submitted { since: Instant },
}

/// What a [`FormDialog::tick`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    None,
    /// The simulated send finished.
    Delivered,
    /// The success panel timed out; the dialog should close.
    Closed,
}

#[derive(Debug, Clone)]
pub struct FormDialog<F> {
    pub fields: F,
    phase: FormPhase,
    error: Option<FormError>,
}

impl<F: FormFields + Default> Default for FormDialog<F> {
    fn default() -> Self {
        Self {
            fields: F::default(),
            phase: FormPhase::Editing,
            error: None,
        }
    }
}

impl<F: FormFields + Default> FormDialog<F> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FormFields> FormDialog<F> {
    pub fn submit(&mut self, now: Instant) -> Result<(), FormError> {
        if self.phase != FormPhase::Editing {
            return Err(FormError::Busy);
        }
        if let Err(e) = self.fields.validate() {
            self.error = Some(e.clone());
            return Err(e);
        }
        self.error = None;
        self.phase = FormPhase::Submitting { since: now };
        Ok(())
    }

    pub fn tick(&mut self, now: Instant) -> FormEvent {
        match self.phase {
            FormPhase::Editing => FormEvent::None,
            FormPhase::Submitting { since } => {
                if now.saturating_duration_since(since) < SUBMIT_DELAY {
                    return FormEvent::None;
                }
                log::info!("Simulated delivery: {}", self.fields.summary());
                self.phase = FormPhase::Submitted { since: now };
                FormEvent::Delivered
            }
            FormPhase::Submitted { since } => {
                if now.saturating_duration_since(since) < CLOSE_DELAY {
                    return FormEvent::None;
                }
                self.fields.clear();
                self.phase = FormPhase::Editing;
                FormEvent::Closed
            }
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted { .. })
    }

    /// Validation message from the last rejected submit.
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Instant of the next phase change, for repaint scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            FormPhase::Editing => None,
            FormPhase::Submitting { since } => Some(since + SUBMIT_DELAY),
            FormPhase::Submitted { since } => Some(since + CLOSE_DELAY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_contact() -> FormDialog<ContactForm> {
        let mut dialog = FormDialog::<ContactForm>::new();
        dialog.fields.name = "สมศรี".into();
        dialog.fields.email = "somsri@example.co.th".into();
        dialog.fields.message = "สนใจเข้าร่วมงาน".into();
        dialog
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email(" a@b.co "));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("@b"));
        assert!(!is_valid_email("a b@c"));
        assert!(!is_valid_email("a@b..c"));
        assert!(!is_valid_email("a@b@c"));
        assert!(!is_valid_email("plain"));
    }

    #[test]
    fn missing_fields_are_rejected_in_order() {
        let mut dialog = FormDialog::<ContactForm>::new();
        let now = Instant::now();
        assert_eq!(dialog.submit(now), Err(FormError::Missing("ชื่อ")));
        dialog.fields.name = "x".into();
        dialog.fields.email = "nope".into();
        assert_eq!(dialog.submit(now), Err(FormError::InvalidEmail));
        assert_eq!(dialog.error(), Some(&FormError::InvalidEmail));
        dialog.fields.email = "x@y.z".into();
        assert_eq!(dialog.submit(now), Err(FormError::Missing("ข้อความ")));
        assert_eq!(dialog.phase(), FormPhase::Editing);
    }

    #[test]
    fn contact_flow_delivers_then_closes() {
        let start = Instant::now();
        let mut dialog = filled_contact();
        dialog.submit(start).unwrap();
        assert!(dialog.is_submitting());
        assert_eq!(dialog.submit(start), Err(FormError::Busy));

        assert_eq!(dialog.tick(start + Duration::from_millis(1000)), FormEvent::None);
        let delivered_at = start + SUBMIT_DELAY;
        assert_eq!(dialog.tick(delivered_at), FormEvent::Delivered);
        assert!(dialog.is_submitted());
        assert_eq!(dialog.fields.name, "สมศรี");

        assert_eq!(dialog.next_deadline(), Some(delivered_at + CLOSE_DELAY));
        assert_eq!(dialog.tick(delivered_at + CLOSE_DELAY), FormEvent::Closed);
        assert_eq!(dialog.phase(), FormPhase::Editing);
        assert_eq!(dialog.fields, ContactForm::default());
    }

    #[test]
    fn subscribe_flow() {
        let start = Instant::now();
        let mut dialog = FormDialog::<SubscribeForm>::new();
        assert_eq!(dialog.submit(start), Err(FormError::Missing("อีเมล")));
        dialog.fields.email = "reader@example.com".into();
        dialog.submit(start).unwrap();
        assert!(dialog.error().is_none());
        assert_eq!(dialog.tick(start + SUBMIT_DELAY), FormEvent::Delivered);
        assert_eq!(
            dialog.tick(start + SUBMIT_DELAY + CLOSE_DELAY),
            FormEvent::Closed
        );
        assert!(dialog.fields.email.is_empty());
    }
}
