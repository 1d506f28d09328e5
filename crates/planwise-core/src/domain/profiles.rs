//! Stack profile registry.
//!
//! # Design
//!
//! Each supported (deployment target × framework) combination is described
//! exactly once by a [`StackProfileDef`]. A def pairs a [`ProfileMatcher`]
//! (either field may be a wildcard) with a descriptive [`StackProfile`].
//! Resolution is a table scan:
//!
//! 1. keep every def whose matcher accepts the pair
//! 2. pick the highest specificity (number of non-wildcard fields)
//! 3. on a tie, the earlier registry entry wins
//! 4. nothing matched: [`DEFAULT_PROFILE`]
//!
//! Resolution is total. Unset and unknown values simply match fewer defs.
//!
//! # Adding a Profile
//!
//! 1. Add one [`StackProfileDef`] to [`PROFILE_REGISTRY`]
//! 2. Run the `registry_is_internally_consistent` test

use serde::Serialize;

use crate::domain::render::RenderContext;
use crate::domain::value_objects::{DeploymentTarget, Framework};

/// Descriptive bundle of stack conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackProfile {
    pub display_name: &'static str,
    pub runtime_description: &'static str,

    /// Directory tree with `{{PROJECT_NAME_*}}` placeholders.
    pub project_layout_template: &'static str,
    pub best_practices: &'static [&'static str],
    pub error_patterns: &'static [&'static str],
    pub anti_patterns: &'static [&'static str],
}

impl StackProfile {
    /// The layout tree with the project name substituted.
    pub fn render_layout(&self, ctx: &RenderContext) -> String {
        ctx.render(self.project_layout_template)
    }
}

/// Which (target, framework) pairs a profile applies to.
///
/// `None` is a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileMatcher {
    pub target: Option<DeploymentTarget>,
    pub framework: Option<Framework>,
}

impl ProfileMatcher {
    pub fn matches(&self, target: Option<&DeploymentTarget>, framework: Option<&Framework>) -> bool {
        self.target.as_ref().is_none_or(|t| Some(t) == target)
            && self.framework.as_ref().is_none_or(|f| Some(f) == framework)
    }

    /// Count of non-wildcard fields.
    pub fn specificity(&self) -> u8 {
        u8::from(self.target.is_some()) + u8::from(self.framework.is_some())
    }
}

#[derive(Debug)]
pub struct StackProfileDef {
    pub matcher: ProfileMatcher,
    pub profile: StackProfile,
}

// ── Default ──────────────────────────────────────────────────────────────────

/// Profile for combinations the registry does not describe.
pub static DEFAULT_PROFILE: StackProfile = StackProfile {
    display_name: "Generic Web Application",
    runtime_description: "Runtime chosen by the team; no platform-specific constraints assumed",
    project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── src/
│   ├── components/
│   ├── pages/
│   ├── services/
│   └── utils/
├── public/
├── tests/
├── .env.example
└── README.md",
    best_practices: &[
        "Keep configuration in environment variables and document them in .env.example",
        "Separate UI components from data access and business logic",
        "Validate all user input on the server",
        "Add automated tests for critical user flows before launch",
    ],
    error_patterns: &[
        "Missing environment variables in production builds",
        "Unhandled promise rejections or exceptions in request handlers",
        "CORS failures between frontend and API origins",
    ],
    anti_patterns: &[
        "Hard-coding secrets or API keys in source files",
        "Mixing data fetching and presentation in the same component",
        "Skipping error boundaries and fallback states",
    ],
};

// ── Registry ─────────────────────────────────────────────────────────────────

/// Single source of truth for stack profiles.
///
/// Ordering only matters between defs of equal specificity.
pub static PROFILE_REGISTRY: &[StackProfileDef] = &[
    // ── Target + framework ────────────────────────────────────────────────────
    StackProfileDef {
        matcher: ProfileMatcher {
            target: Some(DeploymentTarget::Vercel),
            framework: Some(Framework::NextJs),
        },
        profile: StackProfile {
            display_name: "Next.js on Vercel",
            runtime_description: "Node.js and Edge runtime on Vercel serverless functions, App Router with React Server Components",
            project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── app/
│   ├── (marketing)/
│   ├── (app)/
│   ├── api/
│   ├── layout.tsx
│   └── page.tsx
├── components/
│   └── ui/
├── lib/
│   ├── db.ts
│   └── auth.ts
├── public/
├── middleware.ts
├── next.config.ts
└── vercel.json",
            best_practices: &[
                "Default to Server Components and add 'use client' only where interactivity is needed",
                "Use route segment config and revalidate tags for incremental static regeneration",
                "Keep secrets in Vercel environment variables, scoped per environment",
                "Use Edge middleware only for lightweight auth and redirects",
                "Pool database connections or use an HTTP-based driver for serverless",
            ],
            error_patterns: &[
                "Function timeout on long-running API routes",
                "Hydration mismatch between server and client render",
                "Database connection exhaustion from cold starts",
                "Dynamic server usage errors when reading headers in static routes",
            ],
            anti_patterns: &[
                "Fetching data in client components when a server component could do it",
                "Running background jobs inside request handlers",
                "Writing to the local filesystem at runtime",
            ],
        },
    },
    StackProfileDef {
        matcher: ProfileMatcher {
            target: Some(DeploymentTarget::Docker),
            framework: Some(Framework::Django),
        },
        profile: StackProfile {
            display_name: "Django in Docker",
            runtime_description: "Python 3.12 with Gunicorn behind a reverse proxy, packaged as a container image",
            project_layout_template: "\
{{PROJECT_NAME_SNAKE}}/
├── config/
│   ├── settings/
│   │   ├── base.py
│   │   └── production.py
│   ├── urls.py
│   └── wsgi.py
├── apps/
│   ├── core/
│   └── accounts/
├── templates/
├── static/
├── requirements/
├── Dockerfile
├── docker-compose.yml
└── manage.py",
            best_practices: &[
                "Split settings into base, development and production modules",
                "Run migrations as a release step, not at container start",
                "Serve static files through WhiteNoise or a CDN",
                "Run Celery workers as a separate service in compose",
                "Use a multi-stage Dockerfile and a non-root user",
            ],
            error_patterns: &[
                "DisallowedHost when ALLOWED_HOSTS is not set for the container hostname",
                "Static files 404 because collectstatic did not run during the build",
                "Database not ready when the web container starts",
            ],
            anti_patterns: &[
                "Running the development server in production",
                "Baking secrets into the image",
                "Putting business logic in views instead of services or models",
            ],
        },
    },
    // ── Framework only ───────────────────────────────────────────────────────
    StackProfileDef {
        matcher: ProfileMatcher {
            target: None,
            framework: Some(Framework::NextJs),
        },
        profile: StackProfile {
            display_name: "Next.js",
            runtime_description: "Node.js server with the App Router, React Server Components and route handlers",
            project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── app/
│   ├── api/
│   ├── layout.tsx
│   └── page.tsx
├── components/
├── lib/
├── public/
├── next.config.ts
└── package.json",
            best_practices: &[
                "Colocate data fetching with the server component that renders it",
                "Use server actions for mutations and validate input with a schema",
                "Use next/image and next/font for asset optimisation",
                "Build with output: 'standalone' when self-hosting",
            ],
            error_patterns: &[
                "Hydration mismatch between server and client render",
                "Importing server-only modules into client components",
                "Stale data from unintended fetch caching",
            ],
            anti_patterns: &[
                "Marking whole layouts as client components",
                "Calling internal API routes from server components instead of the function directly",
                "Storing session data in module-level variables",
            ],
        },
    },
    StackProfileDef {
        matcher: ProfileMatcher {
            target: None,
            framework: Some(Framework::Astro),
        },
        profile: StackProfile {
            display_name: "Astro",
            runtime_description: "Static-first site generator with island hydration; optional SSR adapter",
            project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── src/
│   ├── components/
│   ├── content/
│   ├── layouts/
│   └── pages/
├── public/
├── astro.config.mjs
└── package.json",
            best_practices: &[
                "Ship zero JavaScript by default and hydrate islands with client:visible",
                "Model content with typed content collections",
                "Enable an SSR adapter only for routes that need it",
                "Generate a sitemap and RSS feed from content collections",
            ],
            error_patterns: &[
                "Hydration directive missing so interactive components render static",
                "Content collection schema validation failures at build time",
                "Server-only APIs used in a static build",
            ],
            anti_patterns: &[
                "Hydrating every component with client:load",
                "Building an application-heavy dashboard on a content-first framework",
                "Fetching the same remote data in many pages instead of once per build",
            ],
        },
    },
    StackProfileDef {
        matcher: ProfileMatcher {
            target: None,
            framework: Some(Framework::SvelteKit),
        },
        profile: StackProfile {
            display_name: "SvelteKit",
            runtime_description: "Svelte compiler with SvelteKit server routes and adapter-based deployment",
            project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── src/
│   ├── lib/
│   │   ├── components/
│   │   └── server/
│   ├── routes/
│   └── app.html
├── static/
├── svelte.config.js
└── package.json",
            best_practices: &[
                "Load data in +page.server.ts and keep secrets in $lib/server",
                "Use form actions with progressive enhancement",
                "Pick the adapter that matches the deployment target",
            ],
            error_patterns: &[
                "Importing $lib/server modules from client code",
                "Load functions returning non-serialisable data",
                "Adapter mismatch with the hosting platform",
            ],
            anti_patterns: &[
                "Using stores for server state that load functions already provide",
                "Calling fetch to your own endpoints from server load functions",
            ],
        },
    },
    StackProfileDef {
        matcher: ProfileMatcher {
            target: None,
            framework: Some(Framework::Nuxt),
        },
        profile: StackProfile {
            display_name: "Nuxt",
            runtime_description: "Vue 3 with the Nitro server engine and hybrid rendering",
            project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── components/
├── composables/
├── layouts/
├── pages/
├── server/
│   ├── api/
│   └── middleware/
├── public/
└── nuxt.config.ts",
            best_practices: &[
                "Use useFetch or useAsyncData to avoid double fetching on hydration",
                "Configure route rules for per-route rendering",
                "Keep runtime secrets in runtimeConfig, not public config",
            ],
            error_patterns: &[
                "Hydration mismatch from browser-only APIs used during SSR",
                "Nitro preset not matching the host",
            ],
            anti_patterns: &[
                "Accessing window or document outside onMounted",
                "Putting server logic in composables shipped to the client",
            ],
        },
    },
    StackProfileDef {
        matcher: ProfileMatcher {
            target: None,
            framework: Some(Framework::Remix),
        },
        profile: StackProfile {
            display_name: "Remix",
            runtime_description: "Web-standard request/response server with nested routes, loaders and actions",
            project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── app/
│   ├── components/
│   ├── models/
│   ├── routes/
│   ├── entry.server.tsx
│   └── root.tsx
├── public/
└── vite.config.ts",
            best_practices: &[
                "Fetch in loaders and mutate in actions",
                "Use nested routes with error boundaries per segment",
                "Rely on forms so the app works before JavaScript loads",
            ],
            error_patterns: &[
                "Loader throwing without a route error boundary",
                "Server-only modules leaking into the client bundle",
            ],
            anti_patterns: &[
                "Fetching data in useEffect instead of loaders",
                "Managing form state client-side when an action would do",
            ],
        },
    },
    StackProfileDef {
        matcher: ProfileMatcher {
            target: None,
            framework: Some(Framework::Django),
        },
        profile: StackProfile {
            display_name: "Django",
            runtime_description: "Python 3.12 with the Django ORM, admin and template engine behind a WSGI/ASGI server",
            project_layout_template: "\
{{PROJECT_NAME_SNAKE}}/
├── config/
│   ├── settings.py
│   ├── urls.py
│   └── wsgi.py
├── apps/
│   └── core/
├── templates/
├── static/
├── requirements.txt
└── manage.py",
            best_practices: &[
                "Keep apps small and focused on one domain concept",
                "Use the Django admin for internal back-office tooling",
                "Use select_related and prefetch_related to avoid N+1 queries",
                "Read secrets from environment variables",
            ],
            error_patterns: &[
                "N+1 queries in list views",
                "Migration conflicts from parallel branches",
                "CSRF failures on cross-origin forms",
            ],
            anti_patterns: &[
                "Fat views with business logic",
                "Running DEBUG=True in production",
            ],
        },
    },
    StackProfileDef {
        matcher: ProfileMatcher {
            target: None,
            framework: Some(Framework::Laravel),
        },
        profile: StackProfile {
            display_name: "Laravel",
            runtime_description: "PHP 8.3 with Eloquent ORM, queues and Blade or Inertia front end",
            project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── app/
│   ├── Http/
│   ├── Models/
│   └── Services/
├── database/
│   └── migrations/
├── resources/
│   └── views/
├── routes/
│   ├── api.php
│   └── web.php
├── tests/
└── artisan",
            best_practices: &[
                "Use form requests for validation",
                "Dispatch slow work to queued jobs",
                "Eager-load relations to avoid N+1 queries",
                "Cache config and routes in production",
            ],
            error_patterns: &[
                "Mass assignment exceptions from missing fillable attributes",
                "Queue workers running stale code after deploy",
                "Missing APP_KEY in new environments",
            ],
            anti_patterns: &[
                "Business logic in controllers",
                "Running queue:work without a supervisor",
            ],
        },
    },
    StackProfileDef {
        matcher: ProfileMatcher {
            target: None,
            framework: Some(Framework::Express),
        },
        profile: StackProfile {
            display_name: "Express API",
            runtime_description: "Node.js HTTP server with Express middleware",
            project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── src/
│   ├── routes/
│   ├── controllers/
│   ├── services/
│   ├── middleware/
│   └── server.ts
├── tests/
└── package.json",
            best_practices: &[
                "Validate request bodies with a schema library",
                "Centralise error handling in one error middleware",
                "Use helmet and a rate limiter on public routes",
            ],
            error_patterns: &[
                "Unhandled async errors that never reach the error middleware",
                "Headers already sent after a double response",
            ],
            anti_patterns: &[
                "Database queries inside route definitions",
                "Synchronous file or crypto calls on the request path",
            ],
        },
    },
    StackProfileDef {
        matcher: ProfileMatcher {
            target: None,
            framework: Some(Framework::FastApi),
        },
        profile: StackProfile {
            display_name: "FastAPI",
            runtime_description: "Python 3.12 ASGI service on Uvicorn with Pydantic models",
            project_layout_template: "\
{{PROJECT_NAME_SNAKE}}/
├── app/
│   ├── api/
│   ├── core/
│   ├── models/
│   ├── schemas/
│   └── main.py
├── tests/
├── alembic/
└── pyproject.toml",
            best_practices: &[
                "Declare request and response models with Pydantic",
                "Inject database sessions and auth through dependencies",
                "Run blocking work in a thread pool or task queue",
            ],
            error_patterns: &[
                "Blocking calls inside async endpoints stall the event loop",
                "422 responses from schema mismatches",
            ],
            anti_patterns: &[
                "Sharing a single database session across requests",
                "Returning ORM objects without response models",
            ],
        },
    },
    StackProfileDef {
        matcher: ProfileMatcher {
            target: None,
            framework: Some(Framework::React),
        },
        profile: StackProfile {
            display_name: "React Single-Page App",
            runtime_description: "Client-rendered React built with Vite and served as static files",
            project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── src/
│   ├── components/
│   ├── features/
│   ├── hooks/
│   ├── routes/
│   └── main.tsx
├── public/
├── index.html
└── vite.config.ts",
            best_practices: &[
                "Use a data-fetching library with caching instead of ad-hoc effects",
                "Code-split routes with lazy imports",
                "Configure the host to fall back to index.html for client routes",
            ],
            error_patterns: &[
                "404 on refresh because the host does not rewrite to index.html",
                "Effects firing twice in strict mode",
            ],
            anti_patterns: &[
                "Relying on client rendering for pages that need SEO",
                "Storing tokens in localStorage",
            ],
        },
    },
    // ── Target only ───────────────────────────────────────────────────────────
    StackProfileDef {
        matcher: ProfileMatcher {
            target: Some(DeploymentTarget::Cloudflare),
            framework: None,
        },
        profile: StackProfile {
            display_name: "Cloudflare Workers and Pages",
            runtime_description: "V8 isolates at the edge with KV, D1, R2 and Queues bindings",
            project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── src/
│   ├── routes/
│   ├── lib/
│   └── index.ts
├── migrations/
├── public/
└── wrangler.toml",
            best_practices: &[
                "Declare every binding in wrangler.toml per environment",
                "Use D1 or Hyperdrive for relational data",
                "Keep per-request CPU time low",
            ],
            error_patterns: &[
                "Node.js built-ins unavailable without the compatibility flag",
                "Exceeded CPU time limit on heavy requests",
            ],
            anti_patterns: &[
                "Opening raw TCP database connections per request",
                "Bundling large Node-only dependencies",
            ],
        },
    },
    StackProfileDef {
        matcher: ProfileMatcher {
            target: Some(DeploymentTarget::Docker),
            framework: None,
        },
        profile: StackProfile {
            display_name: "Containerised Application",
            runtime_description: "Self-hosted container image behind a reverse proxy",
            project_layout_template: "\
{{PROJECT_NAME_KEBAB}}/
├── src/
├── tests/
├── deploy/
│   └── nginx.conf
├── Dockerfile
├── docker-compose.yml
└── .env.example",
            best_practices: &[
                "Use multi-stage builds and a non-root user",
                "Add health checks to every service",
                "Keep state in volumes or managed services, never in the container",
            ],
            error_patterns: &[
                "Container exits because a dependent service is not ready",
                "Environment variables missing from the compose file",
            ],
            anti_patterns: &[
                "Using the latest tag in production",
                "Running several processes in one container without a supervisor",
            ],
        },
    },
];

// ── Lookup API ───────────────────────────────────────────────────────────────

/// Resolve the profile for a (deployment target, framework) pair.
///
/// Total: unset and unknown values resolve to the closest match or
/// [`DEFAULT_PROFILE`].
pub fn resolve_stack_profile(
    target: Option<&DeploymentTarget>,
    framework: Option<&Framework>,
) -> &'static StackProfile {
    find_profile_def(target, framework)
        .map(|def| &def.profile)
        .unwrap_or(&DEFAULT_PROFILE)
}

/// The winning registry entry, if any.
pub fn find_profile_def(
    target: Option<&DeploymentTarget>,
    framework: Option<&Framework>,
) -> Option<&'static StackProfileDef> {
    let mut best: Option<&'static StackProfileDef> = None;
    for def in PROFILE_REGISTRY {
        if !def.matcher.matches(target, framework) {
            continue;
        }
        // strictly greater keeps the earlier entry on ties
        if best.is_none_or(|b| def.matcher.specificity() > b.matcher.specificity()) {
            best = Some(def);
        }
    }
    best
}
