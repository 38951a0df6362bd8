#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

/// A predefined prompt-generation preset.
///
/// `key` is the identifier sent to the template endpoint; title and
/// description are display-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed template catalog, in gallery display order.
///
/// Immutable for the session; the gallery renders one card per entry.
pub static CATALOG: [TemplateDescriptor; 6] = [
    TemplateDescriptor {
        key: "web-e2e",
        title: "🌐 Web Application E2E Testing",
        description: "Template for end-to-end testing of web applications with user workflows, form validation, and cross-browser compatibility.",
    },
    TemplateDescriptor {
        key: "api",
        title: "🔌 API Testing",
        description: "Comprehensive API testing including CRUD operations, authentication, error handling, and response validation.",
    },
    TemplateDescriptor {
        key: "unit",
        title: "🧪 Unit Testing",
        description: "Unit test generation for functions, methods, and components with mocking and edge case coverage.",
    },
    TemplateDescriptor {
        key: "mobile",
        title: "📱 Mobile App Testing",
        description: "Mobile application testing for iOS/Android including gestures, device features, and responsive design.",
    },
    TemplateDescriptor {
        key: "security",
        title: "🔐 Security Testing",
        description: "Security-focused test automation for authentication, authorization, input validation, and vulnerability testing.",
    },
    TemplateDescriptor {
        key: "performance",
        title: "⚡ Performance Testing",
        description: "Performance test automation for load testing, stress testing, and performance monitoring.",
    },
];
