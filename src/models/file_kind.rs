/// Which renderer a file name dispatches to, decided by its extension.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// `.txt` / `.json`: editable text buffer.
    Text,
    /// `.png`: static asset, never gets a buffer.
    Image,
    Unsupported,
}

impl FileKind {
    pub fn from_name(name: &str) -> Self {
        match name.rsplit_once('.').map(|(_, ext)| ext) {
            Some("txt" | "json") => FileKind::Text,
            Some("png") => FileKind::Image,
            _ => FileKind::Unsupported,
        }
    }

    pub fn is_text(self) -> bool {
        self == FileKind::Text
    }
}
