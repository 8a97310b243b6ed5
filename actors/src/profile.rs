use serde::{Deserialize, Serialize};

/// Closed set of supported case-study domains.
///
/// Declaration order is significant: domain detection breaks score ties in
/// favour of the earlier variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Library / document-lending systems.
    Library,
    /// Reservation and booking systems.
    Booking,
    /// Sensor and alerting systems.
    Monitoring,
    /// Smart-home control systems.
    HomeAutomation,
}

impl Domain {
    /// Returns human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Booking => "booking",
            Self::Monitoring => "monitoring",
            Self::HomeAutomation => "home_automation",
        }
    }

    /// Parses a domain hint string; unknown hints yield `None`.
    #[must_use]
    pub fn parse(hint: &str) -> Option<Self> {
        match hint.trim().to_lowercase().as_str() {
            "library" => Some(Self::Library),
            "booking" => Some(Self::Booking),
            "monitoring" => Some(Self::Monitoring),
            "home_automation" | "home-automation" | "homeautomation" => Some(Self::HomeAutomation),
            _ => None,
        }
    }
}

/// Keyword and classification data for one domain.
#[derive(Debug, Clone)]
pub struct DomainProfile {
    /// Domain tag.
    pub domain: Domain,
    /// Keywords scored during domain detection.
    pub keywords: &'static [&'static str],
    /// Role nouns accepted as valid actors for this domain.
    pub roles: &'static [&'static str],
    /// Compound system actors allowed despite containing deny-listed terms.
    pub allowed_compounds: &'static [&'static str],
    /// Domain nouns that are valid in the text but not expected as actors.
    pub domain_nouns: &'static [&'static str],
}

/// Generic technical terms never accepted as actors.
pub const DENY_LIST: &[&str] = &[
    "system",
    "database",
    "application",
    "interface",
    "service",
    "handler",
    "controller",
    "api",
    "page",
    "login",
    "button",
    "form",
    "dialog",
    "window",
    "screen",
    "panel",
    "view",
    "list",
    "search",
    "record",
    "data",
    "info",
    "details",
    "log",
    "history",
    "report",
    "category",
    "type",
    "status",
    "config",
    "setting",
    "item",
    "object",
    "entity",
    "model",
    "catalog",
    "validation",
];

/// Role nouns accepted as actors regardless of domain.
pub const GENERIC_ROLES: &[&str] = &[
    "user",
    "admin",
    "administrator",
    "customer",
    "client",
    "staff",
    "employee",
    "manager",
    "guest",
    "visitor",
    "operator",
    "supervisor",
    "owner",
];

/// Words never considered actor candidates even when capitalized.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "when", "if", "then", "and", "or", "with",
    "shall", "should", "must", "will", "can", "may",
];

const LIBRARY: DomainProfile = DomainProfile {
    domain: Domain::Library,
    keywords: &[
        "book", "books", "library", "librarian", "member", "borrow", "catalog", "issue", "return",
        "fine", "patron", "journal", "magazine", "shelf",
    ],
    roles: &[
        "librarian",
        "member",
        "patron",
        "borrower",
        "reader",
        "student",
        "teacher",
        "author",
        "publisher",
    ],
    allowed_compounds: &["PaymentSystem", "NotificationSystem", "EmailSystem"],
    domain_nouns: &[
        "book", "document", "journal", "magazine", "publication", "shelf", "fine", "article",
    ],
};

const BOOKING: DomainProfile = DomainProfile {
    domain: Domain::Booking,
    keywords: &[
        "booking", "reservation", "ticket", "seat", "hotel", "room", "flight", "payment",
        "schedule", "cancel", "fare", "checkin",
    ],
    roles: &["passenger", "traveler", "agent", "receptionist", "customer"],
    allowed_compounds: &["PaymentSystem", "PaymentGateway", "SmsGateway", "EmailSystem"],
    domain_nouns: &["ticket", "seat", "room", "flight", "invoice", "receipt", "car"],
};

const MONITORING: DomainProfile = DomainProfile {
    domain: Domain::Monitoring,
    keywords: &[
        "sensor", "alert", "monitor", "monitoring", "threshold", "reading", "device", "dashboard",
        "alarm", "metric",
    ],
    roles: &["operator", "technician", "engineer", "inspector"],
    allowed_compounds: &["NotificationSystem", "BackupSystem"],
    domain_nouns: &["sensor", "reading", "threshold", "alarm", "metric", "gauge", "device"],
};

const HOME_AUTOMATION: DomainProfile = DomainProfile {
    domain: Domain::HomeAutomation,
    keywords: &[
        "home", "light", "lights", "thermostat", "door", "appliance", "temperature", "scene",
        "switch", "camera", "automation",
    ],
    roles: &["resident", "homeowner", "occupant"],
    allowed_compounds: &["WeatherService", "VoiceAssistant", "SecuritySystem"],
    domain_nouns: &["light", "thermostat", "door", "appliance", "camera", "switch", "sensor"],
};

/// All known profiles in declaration (tie-break) order.
pub const PROFILES: &[DomainProfile] = &[LIBRARY, BOOKING, MONITORING, HOME_AUTOMATION];

impl DomainProfile {
    /// Looks up the profile for a domain tag.
    #[must_use]
    pub fn for_domain(domain: Domain) -> &'static Self {
        PROFILES
            .iter()
            .find(|profile| profile.domain == domain)
            .expect("every domain has a profile")
    }

    /// Keyword-hit score of this profile against lowercased tokens.
    #[must_use]
    pub fn score(&self, tokens: &[String]) -> usize {
        tokens
            .iter()
            .filter(|token| self.keywords.contains(&token.as_str()))
            .count()
    }
}

/// Detects the domain of a submission by keyword-overlap scoring.
///
/// The highest total hit count wins; ties go to the earlier profile. An
/// explicit hint short-circuits scoring entirely.
#[must_use]
pub fn detect_domain(sentences: &[String], hint: Option<Domain>) -> &'static DomainProfile {
    if let Some(domain) = hint {
        return DomainProfile::for_domain(domain);
    }
    let tokens: Vec<String> = sentences
        .iter()
        .flat_map(|sentence| sentence.split_whitespace())
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect();

    let mut best = &PROFILES[0];
    let mut best_score = best.score(&tokens);
    for profile in &PROFILES[1..] {
        let score = profile.score(&tokens);
        if score > best_score {
            best = profile;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn library_text_scores_library_profile() {
        let profile = detect_domain(
            &sentences(&["The librarian issues a book to the member."]),
            None,
        );
        assert_eq!(profile.domain, Domain::Library);
    }

    #[test]
    fn monitoring_text_scores_monitoring_profile() {
        let profile = detect_domain(
            &sentences(&["The sensor reading crosses the alarm threshold."]),
            None,
        );
        assert_eq!(profile.domain, Domain::Monitoring);
    }

    #[test]
    fn ties_break_by_declaration_order() {
        let profile = detect_domain(&sentences(&["Nothing relevant here."]), None);
        assert_eq!(profile.domain, Domain::Library);
    }

    #[test]
    fn hint_overrides_scoring() {
        let profile = detect_domain(
            &sentences(&["The librarian issues a book."]),
            Some(Domain::Booking),
        );
        assert_eq!(profile.domain, Domain::Booking);
    }

    #[test]
    fn hint_parsing_accepts_aliases() {
        assert_eq!(Domain::parse("Home-Automation"), Some(Domain::HomeAutomation));
        assert_eq!(Domain::parse("unknown"), None);
    }
}
