pub mod revalidate;
