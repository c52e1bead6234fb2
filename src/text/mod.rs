pub mod curved;
