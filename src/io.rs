//! Loading rings from and saving them to decimal text files.

use std::path::Path;

use log::{debug, warn};

use crate::{DigitRing, RingConfig, RingResult};

/// Reads a decimal number from `path` into a ring in the default configuration.
///
/// Lines are trimmed and joined, so a number wrapped over several lines loads whole.
/// An unreadable file, an empty file or text that is not a decimal number all give an
/// empty ring.
pub fn load(path: impl AsRef<Path>) -> DigitRing {
    load_with_config(path, RingConfig::default())
}

/// Like [`load`], with the ring built in `config.main()`
pub fn load_with_config(path: impl AsRef<Path>, config: RingConfig) -> DigitRing {
    let mut ring = DigitRing::with_config(config);

    let text = match fs_err::read_to_string(path.as_ref()) {
        Ok(text) => text,
        Err(e) => {
            warn!("no number loaded: {}", e);
            return ring;
        }
    };

    let joined: String = text.lines().map(str::trim).collect();

    if let Err(e) = ring.parse_decimal(&joined) {
        debug!("no number loaded from {}: {}", path.as_ref().display(), e);
    }

    ring
}

/// Writes the ring's decimal value to `path`, replacing any existing contents
pub fn save(ring: &DigitRing, path: impl AsRef<Path>) -> RingResult<()> {
    fs_err::write(path, ring.to_decimal_string())?;

    Ok(())
}
