use crate::domain::error::SearchError;

pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DEFAULT_INPUT_LENGTH: usize = 10;

/// Fixed-length strings over an alphabet, addressed by a dense `u64` index.
///
/// Index `i` decodes to the base-|alphabet| digits of `i`, most significant
/// symbol first, so index order matches lexicographic order over the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpace {
    alphabet: String,
    length: usize,
    size: u64,
}

impl InputSpace {
    /// Validates the alphabet and length.
    ///
    /// The alphabet must be non-empty ASCII without repeated symbols,
    /// `alphabet.len() ^ length` must fit in `u64`, and the space must hold
    /// at least two inputs.
    pub fn new(alphabet: &str, length: usize) -> Result<Self, SearchError> {
        if alphabet.is_empty() {
            return Err(SearchError::input_space("alphabet must not be empty"));
        }
        if !alphabet.is_ascii() {
            return Err(SearchError::input_space("alphabet must be ASCII"));
        }
        if length == 0 {
            return Err(SearchError::input_space("input length must be at least 1"));
        }
        let mut seen = [false; 128];
        for symbol in alphabet.bytes() {
            let slot = &mut seen[usize::from(symbol)];
            if *slot {
                return Err(SearchError::input_space(format!(
                    "alphabet repeats symbol `{}`",
                    char::from(symbol)
                )));
            }
            *slot = true;
        }

        let radix = alphabet.len() as u64;
        let size = u32::try_from(length)
            .ok()
            .and_then(|exp| radix.checked_pow(exp))
            .ok_or_else(|| {
                SearchError::input_space(format!(
                    "{} symbols ^ length {length} does not fit in 64 bits",
                    alphabet.len()
                ))
            })?;
        if size < 2 {
            return Err(SearchError::input_space(
                "input space must hold at least two distinct inputs",
            ));
        }

        Ok(Self {
            alphabet: alphabet.to_string(),
            length,
            size,
        })
    }

    /// Default alphabet and length, each overridable.
    pub fn with_overrides(alphabet: Option<&str>, length: Option<usize>) -> Result<Self, SearchError> {
        match (alphabet, length) {
            (None, None) => Ok(Self::default()),
            (alphabet, length) => Self::new(
                alphabet.unwrap_or(DEFAULT_ALPHABET),
                length.unwrap_or(DEFAULT_INPUT_LENGTH),
            ),
        }
    }

    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct inputs.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Writes the input at `index` into `out`, replacing its contents.
    pub fn decode_into(&self, mut index: u64, out: &mut Vec<u8>) {
        debug_assert!(index < self.size);
        let symbols = self.alphabet.as_bytes();
        let radix = symbols.len() as u64;
        out.clear();
        out.resize(self.length, 0);
        for slot in out.iter_mut().rev() {
            *slot = symbols[(index % radix) as usize];
            index /= radix;
        }
    }

    pub fn decode(&self, index: u64) -> String {
        let mut out = Vec::with_capacity(self.length);
        self.decode_into(index, &mut out);
        out.into_iter().map(char::from).collect()
    }
}

impl Default for InputSpace {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            length: DEFAULT_INPUT_LENGTH,
            size: 26u64.pow(DEFAULT_INPUT_LENGTH as u32),
        }
    }
}
