//! Compiled-in site identifiers. The EmailJS public key is a client-side
//! key by design; the GitHub calls are unauthenticated.

pub const GITHUB_USERNAME: &str = "Ali-ysf-dev";
pub const GITHUB_API_URL: &str = "https://api.github.com";

pub const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const EMAILJS_PUBLIC_KEY: &str = "NirhiVPX-fKbRk_gz";
pub const EMAILJS_SERVICE_ID: &str = "service_i27vanr";
pub const EMAILJS_TEMPLATE_ID: &str = "template_ce3m214";
pub const CONTACT_EMAIL: &str = "contact@aliyoussef.tech";
