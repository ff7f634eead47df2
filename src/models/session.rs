use serde::{Deserialize, Serialize};

/// Identity object returned by the identity service after a successful
/// credential exchange. Everything except the email is optional on the
/// provider side.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Principal {
    pub display_name: Option<String>,
    pub email: String,
    pub photo_url: Option<String>,
}

/// The application's local projection of a signed-in principal. At most one
/// Session is live at a time, owned by the SessionStore.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
}

impl Session {
    pub fn new(name: &str, email: &str, photo_url: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            photo_url,
        }
    }

    /// The display name falls back to the email when the provider sends none.
    pub fn from_principal(principal: &Principal) -> Self {
        let name = principal
            .display_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| principal.email.clone());

        Self {
            name,
            email: principal.email.clone(),
            photo_url: principal.photo_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_preferred() {
        let principal = Principal {
            display_name: Some("Ann".to_string()),
            email: "ann@x.com".to_string(),
            photo_url: None,
        };
        assert_eq!(Session::from_principal(&principal).name, "Ann");
    }

    #[test]
    fn missing_or_empty_display_name_falls_back_to_email() {
        let mut principal = Principal {
            display_name: None,
            email: "ann@x.com".to_string(),
            photo_url: None,
        };
        assert_eq!(Session::from_principal(&principal).name, "ann@x.com");

        principal.display_name = Some(String::new());
        assert_eq!(Session::from_principal(&principal).name, "ann@x.com");
    }
}
