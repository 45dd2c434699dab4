use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub bullets: Vec<String>,
    pub cta: String,
}

impl Service {
    /// Tag shown on the card: the slug with its first hyphen turned into a space.
    pub fn tag(&self) -> String {
        self.slug.replacen('-', " ", 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceInterest {
    Ads,
    Seo,
    Linkedin,
    Ghostwriting,
    Design,
    Ai,
}

impl ServiceInterest {
    pub const ALL: [ServiceInterest; 6] = [
        ServiceInterest::Ads,
        ServiceInterest::Seo,
        ServiceInterest::Linkedin,
        ServiceInterest::Ghostwriting,
        ServiceInterest::Design,
        ServiceInterest::Ai,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ServiceInterest::Ads => "ads",
            ServiceInterest::Seo => "seo",
            ServiceInterest::Linkedin => "linkedin",
            ServiceInterest::Ghostwriting => "ghostwriting",
            ServiceInterest::Design => "design",
            ServiceInterest::Ai => "ai",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceInterest::Ads => "Paid Marketing (Ads)",
            ServiceInterest::Seo => "SEO",
            ServiceInterest::Linkedin => "LinkedIn Branding",
            ServiceInterest::Ghostwriting => "Ghostwriting",
            ServiceInterest::Design => "Graphic & Brand Design",
            ServiceInterest::Ai => "AI Automations",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

impl Serialize for ServiceInterest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetRange {
    Starter,
    Growth,
    Scale,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 3] = [BudgetRange::Starter, BudgetRange::Growth, BudgetRange::Scale];

    pub fn value(self) -> &'static str {
        match self {
            BudgetRange::Starter => "$2k–$5k",
            BudgetRange::Growth => "$5k–$10k",
            BudgetRange::Scale => "$10k+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetRange::Starter => "$2k–$5k / mo",
            BudgetRange::Growth => "$5k–$10k / mo",
            BudgetRange::Scale => "$10k+ / mo",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.value() == value)
    }
}

impl Serialize for BudgetRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Company,
    Service,
    Budget,
    Message,
}

/// What a visitor fills in on the growth plan form.
///
/// Unselected dropdowns serialize as `""` so every field is always present on
/// the wire.
#[derive(Serialize, Validate, Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadSubmission {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    pub company: String,
    #[serde(serialize_with = "empty_when_none")]
    pub service: Option<ServiceInterest>,
    #[serde(serialize_with = "empty_when_none")]
    pub budget: Option<BudgetRange>,
    pub message: String,
}

impl LeadSubmission {
    pub fn with_field(self, field: LeadField, value: String) -> Self {
        match field {
            LeadField::Name => Self { name: value, ..self },
            LeadField::Email => Self { email: value, ..self },
            LeadField::Company => Self { company: value, ..self },
            LeadField::Service => Self { service: ServiceInterest::from_value(&value), ..self },
            LeadField::Budget => Self { budget: BudgetRange::from_value(&value), ..self },
            LeadField::Message => Self { message: value, ..self },
        }
    }

    /// First failing rule, checked in form order. `None` means the lead can be sent.
    pub fn validation_message(&self) -> Option<String> {
        let errors = self.validate().err()?;
        let fields = errors.field_errors();
        let message = ["name", "email"]
            .iter()
            .filter_map(|field| fields.get(field))
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()));
        message
    }
}

fn empty_when_none<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadSubmission {
        LeadSubmission::default()
            .with_field(LeadField::Name, "Jane Doe".to_string())
            .with_field(LeadField::Email, "jane@company.com".to_string())
    }

    #[test]
    fn tag_replaces_first_hyphen_only() {
        let service = Service {
            slug: "linkedin-ghost-writing".to_string(),
            title: String::new(),
            description: String::new(),
            bullets: vec![],
            cta: String::new(),
        };
        assert_eq!(service.tag(), "linkedin ghost-writing");
    }

    #[test]
    fn service_record_deserializes() {
        let json = r#"{"slug":"seo","title":"SEO","description":"...","bullets":["a","b"],"cta":"Learn more"}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.tag(), "seo");
        assert_eq!(service.bullets, vec!["a", "b"]);
    }

    #[test]
    fn name_and_email_are_required() {
        assert_eq!(
            LeadSubmission::default().validation_message().as_deref(),
            Some("Name is required")
        );
        assert!(filled().with_field(LeadField::Name, String::new()).validation_message().is_some());
        assert_eq!(
            filled().with_field(LeadField::Email, String::new()).validation_message().as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(filled().validation_message(), None);
    }

    #[test]
    fn email_must_have_an_address_shape() {
        let lead = filled().with_field(LeadField::Email, "jane.company.com".to_string());
        assert!(lead.validation_message().is_some());
    }

    #[test]
    fn overlong_local_part_is_reported() {
        let email = format!("{}@x.io", "a".repeat(65));
        let lead = filled().with_field(LeadField::Email, email);
        assert_eq!(
            lead.validation_message().as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn unknown_select_values_clear_the_choice() {
        let lead = filled()
            .with_field(LeadField::Service, "seo".to_string())
            .with_field(LeadField::Budget, "$10k+".to_string());
        assert_eq!(lead.service, Some(ServiceInterest::Seo));
        assert_eq!(lead.budget, Some(BudgetRange::Scale));

        let lead = lead
            .with_field(LeadField::Service, String::new())
            .with_field(LeadField::Budget, "lots".to_string());
        assert_eq!(lead.service, None);
        assert_eq!(lead.budget, None);
    }

    #[test]
    fn empty_choices_serialize_as_empty_strings() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(value["company"], "");
        assert_eq!(value["service"], "");
        assert_eq!(value["budget"], "");
        assert_eq!(value["message"], "");
    }

    #[test]
    fn choices_serialize_as_wire_values() {
        let lead = filled()
            .with_field(LeadField::Service, "ai".to_string())
            .with_field(LeadField::Budget, "$2k–$5k".to_string());
        let value = serde_json::to_value(lead).unwrap();
        assert_eq!(value["service"], "ai");
        assert_eq!(value["budget"], "$2k–$5k");
    }
}
