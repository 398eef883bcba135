//! Digital input pins.
//!
//! Pins are polled, never interrupt driven. The pull-up that keeps an open
//! reed switch or released button at a defined level is configured outside
//! this crate (device tree or `gpio` tooling); here a pin is just a level.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::FortunaError;

/// A boolean-level input.
pub trait InputPin {
    /// Current level, `true` = high.
    fn read(&mut self) -> Result<bool, FortunaError>;
}

impl<P: InputPin + ?Sized> InputPin for Box<P> {
    fn read(&mut self) -> Result<bool, FortunaError> {
        (**self).read()
    }
}

/// A GPIO line exposed through the Linux sysfs `value` file.
#[derive(Debug, Clone)]
pub struct SysfsPin {
    path: PathBuf,
}

impl SysfsPin {
    /// `/sys/class/gpio/gpio<N>/value`. The line must already be exported
    /// and configured as an input.
    pub fn open(pin: u32) -> Result<Self, FortunaError> {
        Self::from_path(format!("/sys/class/gpio/gpio{}/value", pin))
    }

    /// Read levels from any file holding `0` or `1`.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, FortunaError> {
        let path = path.into();
        if !path.exists() {
            return Err(FortunaError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("GPIO value file {} not found", path.display()),
            )));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputPin for SysfsPin {
    fn read(&mut self) -> Result<bool, FortunaError> {
        let raw = fs::read_to_string(&self.path)?;
        match raw.trim() {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(FortunaError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unexpected GPIO value {:?} in {}", other, self.path.display()),
            ))),
        }
    }
}

/// Replays a fixed sequence of levels, then holds the last one.
///
/// ```
/// use fortuna::trigger::{InputPin, ScriptedPin};
///
/// let mut pin = ScriptedPin::new([true, false]);
/// assert!(pin.read()?);
/// assert!(!pin.read()?);
/// assert!(!pin.read()?);
/// # Ok::<(), fortuna::FortunaError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedPin {
    levels: VecDeque<bool>,
    last: bool,
}

impl ScriptedPin {
    pub fn new(levels: impl IntoIterator<Item = bool>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
            last: false,
        }
    }

    pub fn push(&mut self, level: bool) {
        self.levels.push_back(level);
    }
}

impl InputPin for ScriptedPin {
    fn read(&mut self) -> Result<bool, FortunaError> {
        if let Some(level) = self.levels.pop_front() {
            self.last = level;
        }
        Ok(self.last)
    }
}
