/// Visitor-facing response text. Failure messages quote the business phone
/// so the visitor always has a way to reach the office.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessages {
    pub success: String,
    pub total_failure: String,
    pub unexpected: String,
}

impl ContactMessages {
    #[must_use]
    pub fn for_business_phone(phone: &str) -> Self {
        Self {
            success: "Thank you! Your request has been received. We'll be in touch shortly."
                .to_owned(),
            total_failure: format!(
                "We couldn't submit your request right now. Please call us directly at {phone}."
            ),
            unexpected: format!(
                "An unexpected error occurred. Please call us directly at {phone}."
            ),
        }
    }
}
