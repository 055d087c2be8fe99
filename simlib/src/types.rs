pub type Program = String;
pub type Args = Vec<String>;
pub type OutputText = String;
