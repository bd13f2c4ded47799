pub mod scanner;
pub mod supabase;
