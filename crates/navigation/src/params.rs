use story::Story;

/// Backing store for the single persisted chapter parameter.
///
/// The value must survive a full page reload (the web implementation keeps it
/// in the URL query string). Absence is a normal, representable state, never
/// an error.
pub trait ParamStore {
    fn get(&self) -> Result<Option<String>, ParamError>;
    fn set(&mut self, value: &str) -> Result<(), ParamError>;
    fn clear(&mut self) -> Result<(), ParamError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    Unavailable,
    Io(String),
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::Unavailable => write!(f, "parameter storage unavailable"),
            ParamError::Io(msg) => write!(f, "parameter storage error: {msg}"),
        }
    }
}

impl std::error::Error for ParamError {}

/// Resolves the persisted parameter to a chapter index.
///
/// Resolution contract: no parameter, or a value matching no chapter id,
/// means "no current chapter" (the intro state). Every caller must treat
/// `None` that way; an unmatched value is not an error.
pub fn current_chapter_index<P: ParamStore>(
    store: &P,
    story: &Story,
) -> Result<Option<usize>, ParamError> {
    let Some(id) = store.get()? else {
        return Ok(None);
    };
    Ok(story.index_of(&id))
}

/// Plain in-memory store for native hosts and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InMemoryParamStore {
    value: Option<String>,
}

impl InMemoryParamStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParamStore for InMemoryParamStore {
    fn get(&self) -> Result<Option<String>, ParamError> {
        Ok(self.value.clone())
    }

    fn set(&mut self, value: &str) -> Result<(), ParamError> {
        self.value = Some(value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ParamError> {
        self.value = None;
        Ok(())
    }
}
