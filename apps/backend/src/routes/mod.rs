pub mod content;
pub mod grade;
pub mod words;
