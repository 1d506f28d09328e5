//! Built-in option tables.
//!
//! The reference catalog that ships with Planwise. Ids match the wire
//! strings the engine parses; labels are what documents display. Catalog
//! directories loaded at runtime overlay these tables entry by entry.

use planwise_core::domain::{CatalogEntry, CatalogGroup};

type Row = (&'static str, &'static str, &'static str);

struct GroupTable {
    group: CatalogGroup,
    rows: &'static [Row],
}

static TABLES: &[GroupTable] = &[
    GroupTable {
        group: CatalogGroup::WebsiteType,
        rows: &[
            ("landing", "Landing Page", "Single page focused on one conversion goal"),
            ("portfolio", "Portfolio", "Showcase of work or projects"),
            ("blog", "Blog", "Articles published over time"),
            ("ecommerce", "Online Shop", "Products sold directly to customers"),
            ("marketplace", "Marketplace", "Many sellers, many buyers"),
            ("saas", "SaaS Application", "Subscription software used in the browser"),
            ("corporate", "Corporate Website", "Company presence and information"),
            ("booking", "Booking Platform", "Appointments, reservations or tickets"),
            ("community", "Community", "Members, profiles and discussions"),
            ("documentation", "Documentation", "Reference and guide pages"),
            ("dashboard", "Dashboard", "Internal tool or data dashboard"),
        ],
    },
    GroupTable {
        group: CatalogGroup::Framework,
        rows: &[
            ("nextjs", "Next.js", "React framework with server rendering and routing"),
            ("astro", "Astro", "Content-first static site builder"),
            ("nuxt", "Nuxt", "Vue framework with server rendering"),
            ("sveltekit", "SvelteKit", "Svelte application framework"),
            ("remix", "Remix", "React framework built on web fundamentals"),
            ("react", "React (Vite)", "Client-side single-page application"),
            ("vue", "Vue (Vite)", "Client-side single-page application"),
            ("angular", "Angular", "Opinionated TypeScript application framework"),
            ("django", "Django", "Batteries-included Python web framework"),
            ("fastapi", "FastAPI", "Typed Python API framework"),
            ("laravel", "Laravel", "PHP application framework"),
            ("rails", "Ruby on Rails", "Convention-driven Ruby framework"),
            ("express", "Express", "Minimal Node.js HTTP framework"),
            ("wordpress", "WordPress", "PHP CMS with themes and plugins"),
        ],
    },
    GroupTable {
        group: CatalogGroup::Database,
        rows: &[
            ("postgresql", "PostgreSQL", "Relational database"),
            ("mysql", "MySQL", "Relational database"),
            ("sqlite", "SQLite", "Embedded single-file database"),
            ("mongodb", "MongoDB", "Document database"),
            ("supabase", "Supabase", "Hosted Postgres with auth and storage"),
            ("firebase", "Firebase Firestore", "Hosted document database"),
            ("planetscale", "PlanetScale", "Serverless MySQL"),
        ],
    },
    GroupTable {
        group: CatalogGroup::ApiStyle,
        rows: &[
            ("rest", "REST", "Resource-oriented HTTP endpoints"),
            ("graphql", "GraphQL", "Single typed query endpoint"),
            ("trpc", "tRPC", "End-to-end typed procedures for TypeScript"),
            ("server-actions", "Server Actions", "Framework-native server functions"),
            ("grpc", "gRPC", "Binary RPC over HTTP/2"),
        ],
    },
    GroupTable {
        group: CatalogGroup::DeploymentTarget,
        rows: &[
            ("vercel", "Vercel", "Serverless and edge hosting"),
            ("netlify", "Netlify", "Static and serverless hosting"),
            ("cloudflare", "Cloudflare Pages", "Edge hosting on Workers"),
            ("aws", "AWS", "Amazon Web Services"),
            ("docker", "Docker", "Self-hosted containers"),
            ("railway", "Railway", "Managed containers and databases"),
            ("fly", "Fly.io", "Containers close to users"),
            ("github-pages", "GitHub Pages", "Static hosting only"),
        ],
    },
    GroupTable {
        group: CatalogGroup::Styling,
        rows: &[
            ("tailwind", "Tailwind CSS", "Utility-first CSS"),
            ("css-modules", "CSS Modules", "Locally scoped stylesheets"),
            ("styled-components", "styled-components", "CSS-in-JS"),
            ("sass", "Sass", "CSS preprocessor"),
            ("bootstrap", "Bootstrap", "Component CSS framework"),
            ("vanilla-css", "Plain CSS", ""),
        ],
    },
    GroupTable {
        group: CatalogGroup::AuthMethod,
        rows: &[
            ("email-password", "Email & Password", ""),
            ("magic-link", "Magic Link", "Passwordless sign-in by email"),
            ("google", "Google", "OAuth sign-in"),
            ("github", "GitHub", "OAuth sign-in"),
            ("apple", "Apple", "Sign in with Apple"),
            ("passkey", "Passkeys", "WebAuthn credentials"),
            ("sso", "Enterprise SSO", "SAML or OIDC"),
        ],
    },
    GroupTable {
        group: CatalogGroup::PaymentProvider,
        rows: &[
            ("stripe", "Stripe", "Cards, wallets and subscriptions"),
            ("stripe-connect", "Stripe Connect", "Payouts to marketplace sellers"),
            ("paypal", "PayPal", ""),
            ("paddle", "Paddle", "Merchant of record for software"),
            ("mollie", "Mollie", "European payment methods"),
        ],
    },
    GroupTable {
        group: CatalogGroup::Feature,
        rows: &[
            ("search", "Search", ""),
            ("comments", "Comments", ""),
            ("notifications", "Notifications", ""),
            ("user-profiles", "User Profiles", ""),
            ("reviews", "Reviews & Ratings", ""),
            ("wishlist", "Wishlist", ""),
            ("newsletter", "Newsletter Signup", ""),
            ("calendar", "Calendar", ""),
            ("messaging", "Messaging", ""),
            ("analytics-dashboard", "Analytics Dashboard", ""),
            ("team-management", "Team Management", ""),
            ("language-switcher", "Language Switcher", ""),
            ("ai-assistant", "AI Assistant", ""),
        ],
    },
    GroupTable {
        group: CatalogGroup::BusinessModule,
        rows: &[
            ("crm", "CRM", "Contacts and deal pipeline"),
            ("invoicing", "Invoicing", "Invoices and payment tracking"),
            ("inventory", "Inventory", "Stock levels and locations"),
            ("scheduling", "Scheduling", "Appointments and availability"),
            ("hr", "HR", "Employees and roles"),
            ("projects", "Project Management", "Projects, tasks and owners"),
            ("reporting", "Reporting", "Scheduled reports"),
            ("orders", "Order Management", "Order processing and fulfilment"),
            ("billing", "Billing", "Plans, usage and invoices"),
            ("tenant-admin", "Tenant Administration", "Manage organisations"),
        ],
    },
    GroupTable {
        group: CatalogGroup::AiProvider,
        rows: &[
            ("openai", "OpenAI", ""),
            ("anthropic", "Anthropic", ""),
            ("mistral", "Mistral", ""),
            ("cohere", "Cohere", "Embeddings and reranking"),
            ("workers-ai", "Workers AI", "Models on Cloudflare's edge"),
        ],
    },
    GroupTable {
        group: CatalogGroup::Cms,
        rows: &[
            ("sanity", "Sanity", "Hosted structured content"),
            ("contentful", "Contentful", "Hosted headless CMS"),
            ("strapi", "Strapi", "Self-hosted headless CMS"),
            ("payload", "Payload", "Code-first TypeScript CMS"),
            ("markdown", "Markdown files", "Content in the repository"),
            ("wordpress", "WordPress", "Headless or classic WordPress"),
        ],
    },
    GroupTable {
        group: CatalogGroup::Locale,
        rows: &[
            ("en", "English", ""),
            ("de", "German", ""),
            ("fr", "French", ""),
            ("es", "Spanish", ""),
            ("it", "Italian", ""),
            ("nl", "Dutch", ""),
            ("pt", "Portuguese", ""),
            ("ja", "Japanese", ""),
        ],
    },
    GroupTable {
        group: CatalogGroup::Testing,
        rows: &[
            ("vitest", "Vitest", "Unit tests"),
            ("jest", "Jest", "Unit tests"),
            ("playwright", "Playwright", "End-to-end tests"),
            ("cypress", "Cypress", "End-to-end tests"),
            ("pytest", "pytest", "Python tests"),
            ("phpunit", "PHPUnit", "PHP tests"),
        ],
    },
    GroupTable {
        group: CatalogGroup::CiCd,
        rows: &[
            ("github-actions", "GitHub Actions", ""),
            ("gitlab-ci", "GitLab CI", ""),
            ("circleci", "CircleCI", ""),
            ("vercel-git", "Vercel Git Integration", "Deploy on push"),
        ],
    },
];

/// Built-in entries of one group, in display order.
pub fn builtin_entries(group: CatalogGroup) -> Vec<CatalogEntry> {
    TABLES
        .iter()
        .filter(|table| table.group == group)
        .flat_map(|table| table.rows.iter())
        .map(|&(id, label, description)| CatalogEntry::new(id, label).with_description(description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use planwise_core::domain::{ApiStyle, Database, DeploymentTarget, Framework, WebsiteType};
    use std::collections::HashSet;

    #[test]
    fn every_group_has_valid_unique_entries() {
        for group in CatalogGroup::ALL {
            let entries = builtin_entries(group);
            assert!(!entries.is_empty(), "{group} is empty");

            let mut seen = HashSet::new();
            for entry in &entries {
                entry.validate(group).unwrap();
                assert!(seen.insert(entry.id.clone()), "{group}: duplicate {}", entry.id);
            }
        }
    }

    #[test]
    fn typed_groups_only_list_known_values() {
        let all_known = |group, is_other: fn(&str) -> bool| {
            builtin_entries(group).iter().all(|e| !is_other(&e.id))
        };
        assert!(all_known(CatalogGroup::WebsiteType, |id| {
            matches!(WebsiteType::parse(id), WebsiteType::Other(_))
        }));
        assert!(all_known(CatalogGroup::Framework, |id| {
            matches!(Framework::parse(id), Framework::Other(_))
        }));
        assert!(all_known(CatalogGroup::Database, |id| {
            matches!(Database::parse(id), Database::Other(_))
        }));
        assert!(all_known(CatalogGroup::ApiStyle, |id| {
            matches!(ApiStyle::parse(id), ApiStyle::Other(_))
        }));
        assert!(all_known(CatalogGroup::DeploymentTarget, |id| {
            matches!(DeploymentTarget::parse(id), DeploymentTarget::Other(_))
        }));
    }
}
