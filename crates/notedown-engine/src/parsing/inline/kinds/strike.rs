/// Strikethrough, delimited by double tildes.
pub struct Strike;

impl Strike {
    pub const DELIMITER: &'static str = "~~";
}
