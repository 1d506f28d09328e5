//! Shared derivation step for both documents.
//!
//! Entities, endpoints, components and constraints are derived once per
//! synthesis and read by every section that needs them. Commerce entities
//! are not derived here; they belong to the commerce fragment so that
//! toggling commerce only changes that one section.

use serde::Serialize;

use crate::domain::configuration::Configuration;
use crate::domain::profiles::StackProfile;
use crate::domain::render::{to_kebab_case, to_pascal_case};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub name: String,
    pub fields: Vec<String>,
    /// Collection route segment, e.g. `posts`.
    pub route: String,
}

impl Entity {
    fn new(name: &str, route: &str, fields: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
            route: route.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: String,
    pub purpose: String,
}

impl Endpoint {
    fn new(method: &'static str, path: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            purpose: purpose.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Artifacts {
    pub entities: Vec<Entity>,
    pub endpoints: Vec<Endpoint>,
    pub components: Vec<String>,
    pub constraints: Vec<String>,
}

impl Artifacts {
    pub fn entity_names(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.name.as_str()).collect()
    }
}

pub fn derive_artifacts(config: &Configuration, profile: &StackProfile) -> Artifacts {
    let entities = derive_entities(config);
    let endpoints = derive_endpoints(config, &entities);
    Artifacts {
        components: derive_components(config),
        constraints: derive_constraints(config, profile),
        entities,
        endpoints,
    }
}

fn derive_entities(config: &Configuration) -> Vec<Entity> {
    let mut entities = Vec::new();

    if config.business.multi_tenant {
        entities.push(Entity::new("Tenant", "tenants", &["id", "name", "slug", "plan", "createdAt"]));
    }
    if config.auth.enabled {
        let mut user = Entity::new("User", "users", &["id", "email", "name", "createdAt"]);
        if !config.auth.roles.is_empty() {
            user.fields.push("role".into());
        }
        if config.business.multi_tenant {
            user.fields.push("tenantId".into());
        }
        entities.push(user);
    }
    if config.auth.enabled && config.auth.session_strategy == "database" {
        entities.push(Entity::new("Session", "sessions", &["id", "userId", "expiresAt"]));
    }
    if config.content.blog || !config.content.cms.is_empty() {
        entities.push(Entity::new(
            "Post",
            "posts",
            &["id", "title", "slug", "body", "publishedAt", "authorId"],
        ));
    }
    if config.content.newsletter {
        entities.push(Entity::new("Subscriber", "subscribers", &["id", "email", "confirmedAt"]));
    }
    for module in &config.business.modules {
        entities.push(module_entity(module));
    }
    if !config.features.notifications.is_empty() {
        entities.push(Entity::new(
            "Notification",
            "notifications",
            &["id", "userId", "channel", "payload", "readAt"],
        ));
    }
    if config.features.file_uploads {
        entities.push(Entity::new(
            "MediaAsset",
            "media",
            &["id", "url", "mimeType", "size", "uploadedBy"],
        ));
    }
    if config.integrations.ai.enabled {
        entities.push(Entity::new(
            "Conversation",
            "conversations",
            &["id", "userId", "messages", "model", "createdAt"],
        ));
    }
    if config.security.audit_log {
        entities.push(Entity::new(
            "AuditLogEntry",
            "audit-log",
            &["id", "actorId", "action", "target", "at"],
        ));
    }

    entities
}

fn module_entity(module: &str) -> Entity {
    match module {
        "crm" => Entity::new("Contact", "contacts", &["id", "name", "email", "company", "stage"]),
        "invoicing" => Entity::new(
            "Invoice",
            "invoices",
            &["id", "number", "customerId", "total", "status", "dueAt"],
        ),
        "inventory" => Entity::new("StockItem", "stock", &["id", "sku", "quantity", "location"]),
        "scheduling" => Entity::new(
            "Appointment",
            "appointments",
            &["id", "startsAt", "endsAt", "customerId", "status"],
        ),
        "hr" => Entity::new("Employee", "employees", &["id", "name", "role", "startDate"]),
        "projects" | "project-management" => {
            Entity::new("Project", "projects", &["id", "name", "status", "ownerId"])
        }
        "reporting" => Entity::new("Report", "reports", &["id", "name", "query", "schedule"]),
        other => {
            let name = to_pascal_case(other);
            Entity {
                route: to_kebab_case(other),
                name: if name.is_empty() { "Record".into() } else { name },
                fields: vec!["id".into(), "createdAt".into()],
            }
        }
    }
}

fn derive_endpoints(config: &Configuration, entities: &[Entity]) -> Vec<Endpoint> {
    let mut endpoints = Vec::new();

    if config.auth.enabled {
        endpoints.push(Endpoint::new("POST", "/api/auth/sign-in", "Start a session"));
        endpoints.push(Endpoint::new("POST", "/api/auth/sign-out", "End the session"));
        endpoints.push(Endpoint::new("GET", "/api/me", "Current user profile"));
    }
    for entity in entities {
        if entity.name == "User" || entity.name == "Session" {
            continue;
        }
        endpoints.push(Endpoint::new(
            "GET",
            format!("/api/{}", entity.route),
            format!("List {} records", entity.name),
        ));
        endpoints.push(Endpoint::new(
            "POST",
            format!("/api/{}", entity.route),
            format!("Create a {}", entity.name),
        ));
        endpoints.push(Endpoint::new(
            "PATCH",
            format!("/api/{}/:id", entity.route),
            format!("Update a {}", entity.name),
        ));
    }
    if !config.features.search.is_empty() || config.features.has("search") {
        endpoints.push(Endpoint::new("GET", "/api/search", "Full-text search"));
    }
    if config.features.file_uploads {
        endpoints.push(Endpoint::new("POST", "/api/uploads", "Upload a file"));
    }
    if config.integrations.ai.enabled {
        endpoints.push(Endpoint::new("POST", "/api/ai/chat", "Send a prompt to the assistant"));
    }
    if config.integrations.webhooks {
        endpoints.push(Endpoint::new("POST", "/api/webhooks/:source", "Receive third-party events"));
    }

    endpoints
}

fn derive_components(config: &Configuration) -> Vec<String> {
    let mut components: Vec<String> = ["AppLayout", "Header", "Footer", "Navigation"]
        .into_iter()
        .map(String::from)
        .collect();

    let mut add = |name: &str| components.push(name.to_string());

    if config.auth.enabled {
        add("SignInForm");
        add("UserMenu");
    }
    if config.content.blog {
        add("PostList");
        add("PostView");
    }
    if !config.features.search.is_empty() || config.features.has("search") {
        add("SearchBar");
    }
    if config.design.dark_mode {
        add("ThemeToggle");
    }
    if config.is_multilingual() {
        add("LanguageSwitcher");
    }
    if !config.features.notifications.is_empty() {
        add("NotificationCenter");
    }
    if config.features.file_uploads {
        add("FileUploader");
    }
    if config.integrations.ai.enabled {
        add("ChatPanel");
    }
    if config.security.cookie_consent {
        add("CookieBanner");
    }
    for module in &config.business.modules {
        let name = to_pascal_case(module);
        if !name.is_empty() {
            components.push(format!("{name}Dashboard"));
        }
    }

    components
}

fn derive_constraints(config: &Configuration, profile: &StackProfile) -> Vec<String> {
    let mut constraints = vec![format!("Runtime: {}", profile.runtime_description)];

    if config.design.responsive {
        constraints.push("Mobile-first responsive layout".into());
    }
    if !config.design.accessibility_level.is_empty() {
        constraints.push(format!(
            "Meet WCAG {} accessibility",
            config.design.accessibility_level.to_ascii_uppercase()
        ));
    }
    if config.security.ssl {
        constraints.push("Serve every page over HTTPS".into());
    }
    if config.security.gdpr {
        constraints.push("Process personal data in line with GDPR".into());
    }
    if !config.deployment.region.is_empty() {
        constraints.push(format!("Host data in region {}", config.deployment.region));
    }
    if config.performance.performance_budget {
        constraints.push("Stay within a performance budget (LCP under 2.5s, JS under 200 KB)".into());
    }
    if !config.security.cors_origins.is_empty() {
        constraints.push(format!(
            "Allow cross-origin requests only from: {}",
            config.security.cors_origins.join(", ")
        ));
    }

    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profiles::DEFAULT_PROFILE;

    #[test]
    fn empty_configuration_still_has_layout_components() {
        let artifacts = derive_artifacts(&Configuration::default(), &DEFAULT_PROFILE);
        assert!(artifacts.entities.is_empty());
        assert!(artifacts.endpoints.is_empty());
        assert_eq!(artifacts.components.len(), 4);
        assert!(artifacts.constraints[0].starts_with("Runtime:"));
    }

    #[test]
    fn auth_and_modules_drive_entities_and_routes() {
        let mut config = Configuration::default();
        config.auth.enabled = true;
        config.auth.roles = vec!["admin".into(), "member".into()];
        config.business.modules = vec!["crm".into(), "fleet tracking".into()];

        let artifacts = derive_artifacts(&config, &DEFAULT_PROFILE);
        assert_eq!(artifacts.entity_names(), vec!["User", "Contact", "FleetTracking"]);
        assert!(artifacts.entities[0].fields.contains(&"role".to_string()));
        assert!(artifacts.endpoints.iter().any(|e| e.path == "/api/fleet-tracking"));
        assert!(artifacts.endpoints.iter().all(|e| e.path != "/api/users"));
        assert!(artifacts.components.contains(&"CrmDashboard".to_string()));
    }

    #[test]
    fn commerce_never_leaks_into_shared_artifacts() {
        let mut config = Configuration::default();
        config.auth.enabled = true;
        let without = derive_artifacts(&config, &DEFAULT_PROFILE);
        config.commerce.enabled = true;
        config.commerce.subscriptions = true;
        let with = derive_artifacts(&config, &DEFAULT_PROFILE);
        assert_eq!(without, with);
    }
}
