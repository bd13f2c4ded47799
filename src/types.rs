pub use crate::utils::supabase;
use async_trait::async_trait;
use std::env;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub supabase: supabase::SupabaseClient,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub supabase: SupabaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let supabase_url = env::var("SUPABASE_URL").expect("SUPABASE_URL not set");
        let supabase_key = env::var("SUPABASE_KEY").expect("SUPABASE_KEY not set");

        Self {
            app: AppConfig { host, port },
            supabase: SupabaseConfig {
                url: supabase_url,
                key: supabase_key,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let supabase = supabase::SupabaseClient::new(&self.supabase.url, &self.supabase.key);

        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            supabase,
        }
    }
}
