//! Session state and the login form.

use bazaar_model::Record;

/// Login form buffers.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub busy: bool,
    pub error: Option<String>,
}

/// The authenticated session, if any.
#[derive(Debug, Default)]
pub struct SessionState {
    pub form: LoginForm,
    pub user: Option<Record>,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Display name of the signed-in admin.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| {
                let name = u.text("name");
                if name.is_empty() { u.text("email") } else { name }
            })
            .unwrap_or_default()
    }

    pub fn sign_in(&mut self, user: Record) {
        self.user = Some(user);
        self.form = LoginForm::default();
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.form = LoginForm::default();
    }
}
