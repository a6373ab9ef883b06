//! Software mixer
//!
//! Keeps a 0-100 volume level. A mixer can be marked unavailable, which is
//! how a server without a working mixer behaves: the volume reads as unknown
//! and every change is refused.

use crate::actors::MixerActor;
use crate::error::ActorResult;
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Debug)]
struct Inner {
    /// Volume level (0-100)
    level: u8,

    available: bool,
}

/// Volume held in memory
#[derive(Debug)]
pub struct SoftwareMixer {
    inner: Mutex<Inner>,
}

impl SoftwareMixer {
    /// Create a mixer at `level`, clamped to 100
    pub fn new(level: u8) -> Self {
        Self::build(level, true)
    }

    /// A mixer that cannot be read or changed
    pub fn unavailable() -> Self {
        Self::build(0, false)
    }

    fn build(level: u8, available: bool) -> Self {
        Self {
            inner: Mutex::new(Inner {
                level: level.min(100),
                available,
            }),
        }
    }

    /// Current level, regardless of availability
    pub async fn level(&self) -> u8 {
        self.inner.lock().await.level
    }

    pub async fn set_available(&self, available: bool) {
        self.inner.lock().await.available = available;
    }
}

impl Default for SoftwareMixer {
    fn default() -> Self {
        Self::new(80) // Default to 80%
    }
}

#[async_trait]
impl MixerActor for SoftwareMixer {
    async fn volume(&self) -> ActorResult<Option<u8>> {
        let inner = self.inner.lock().await;
        Ok(inner.available.then_some(inner.level))
    }

    async fn set_volume(&self, volume: u8) -> ActorResult<bool> {
        let mut inner = self.inner.lock().await;
        if !inner.available {
            return Ok(false);
        }
        inner.level = volume.min(100);
        Ok(true)
    }
}
