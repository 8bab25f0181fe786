use crate::types::Stream;

/// The distinct names a stream is known by: filename hint, secondary name and
/// display title.
///
/// Empty and repeated values are dropped. The stream's score is the minimum
/// over all candidates, so their order never affects the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateNames<'a> {
    names: Vec<&'a str>,
}

impl<'a> CandidateNames<'a> {
    #[must_use]
    pub fn from_stream(stream: &'a Stream) -> Self {
        let mut names = Vec::with_capacity(3);
        for name in [stream.filename_hint(), stream.name(), stream.title()]
            .into_iter()
            .flatten()
        {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self { names }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
