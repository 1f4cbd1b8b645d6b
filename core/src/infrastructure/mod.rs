pub mod llm;
pub mod random;
pub mod supabase;
