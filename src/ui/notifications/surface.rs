// SPDX-License-Identifier: MPL-2.0
//! Rendering surfaces: the containers that stack toasts of one bucket.
//!
//! Surfaces are created lazily on first use and live for the rest of the
//! session. The `Error` severity gets its own high-visibility surface at
//! the top-center of the window; everything else shares the bottom-right
//! surface.

use super::notification::{Notification, NotificationId, Severity};

/// Placement bucket for a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceBucket {
    /// Bottom-right stack shared by info/success/warning toasts.
    Standard,
    /// Top-center stack reserved for error toasts.
    Critical,
}

impl SurfaceBucket {
    /// Maps a severity to the bucket its toasts render in.
    #[must_use]
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => SurfaceBucket::Critical,
            _ => SurfaceBucket::Standard,
        }
    }
}

/// An owned, append-ordered stack of notifications for one bucket.
#[derive(Debug)]
pub struct Surface {
    bucket: SurfaceBucket,
    toasts: Vec<Notification>,
}

impl Surface {
    fn new(bucket: SurfaceBucket) -> Self {
        Self {
            bucket,
            toasts: Vec::new(),
        }
    }

    #[must_use]
    pub fn bucket(&self) -> SurfaceBucket {
        self.bucket
    }

    /// Appends a notification to the stack.
    pub fn insert(&mut self, notification: Notification) {
        self.toasts.push(notification);
    }

    /// Detaches a notification by id.
    ///
    /// Returns `false` when the id is unknown; removal is idempotent.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.toasts.iter().position(|n| n.id() == id) {
            self.toasts.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.toasts.iter_mut().find(|n| n.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Memoized surface factory keyed by bucket.
///
/// Each bucket's surface is created on first access and then reused; two
/// `show` calls for the same bucket never create a second surface.
#[derive(Debug, Default)]
pub struct Surfaces {
    standard: Option<Surface>,
    critical: Option<Surface>,
}

impl Surfaces {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the surface for a bucket, creating it on first use.
    pub fn get_or_create(&mut self, bucket: SurfaceBucket) -> &mut Surface {
        let slot = match bucket {
            SurfaceBucket::Standard => &mut self.standard,
            SurfaceBucket::Critical => &mut self.critical,
        };
        slot.get_or_insert_with(|| Surface::new(bucket))
    }

    /// Returns the surface for a bucket if it was ever created.
    #[must_use]
    pub fn get(&self, bucket: SurfaceBucket) -> Option<&Surface> {
        match bucket {
            SurfaceBucket::Standard => self.standard.as_ref(),
            SurfaceBucket::Critical => self.critical.as_ref(),
        }
    }

    /// Number of surfaces created so far.
    #[must_use]
    pub fn surface_count(&self) -> usize {
        usize::from(self.standard.is_some()) + usize::from(self.critical.is_some())
    }

    /// Looks up a notification across all surfaces.
    pub fn find_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.standard
            .as_mut()
            .and_then(|s| s.get_mut(id))
            .or_else(|| self.critical.as_mut().and_then(|s| s.get_mut(id)))
    }

    /// Detaches a notification from whichever surface holds it.
    ///
    /// Idempotent: unknown ids are a no-op.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        self.standard.as_mut().is_some_and(|s| s.remove(id))
            || self.critical.as_mut().is_some_and(|s| s.remove(id))
    }

    /// Total number of inserted notifications across all surfaces.
    #[must_use]
    pub fn toast_count(&self) -> usize {
        self.standard.as_ref().map_or(0, Surface::len)
            + self.critical.as_ref().map_or(0, Surface::len)
    }
}
