use shared::LoginRequest;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub mobile: String,
    pub farm_name: String,
}

impl LoginForm {
    /// The request to send, or None while either field is blank
    pub fn to_request(&self) -> Option<LoginRequest> {
        let mobile = self.mobile.trim();
        let farm_name = self.farm_name.trim();

        if mobile.is_empty() || farm_name.is_empty() {
            return None;
        }

        Some(LoginRequest {
            mobile: mobile.to_string(),
            farm_name: farm_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_produce_no_request() {
        let form = LoginForm {
            mobile: "  ".to_string(),
            farm_name: "Green Pastures".to_string(),
        };
        assert_eq!(form.to_request(), None);

        let form = LoginForm {
            mobile: "9876543210".to_string(),
            farm_name: String::new(),
        };
        assert_eq!(form.to_request(), None);
    }

    #[test]
    fn test_request_is_trimmed() {
        let form = LoginForm {
            mobile: " 9876543210 ".to_string(),
            farm_name: "Green Pastures ".to_string(),
        };
        assert_eq!(
            form.to_request(),
            Some(LoginRequest {
                mobile: "9876543210".to_string(),
                farm_name: "Green Pastures".to_string(),
            })
        );
    }
}
