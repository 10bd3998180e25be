#![forbid(unsafe_code)]

//! Two-way synchronization between the thumb and the document.
//!
//! [`ScrollSyncEngine`] owns the attached document, the latest
//! [`DocumentMetrics`], a running scroll-offset accumulator, and the
//! reentrancy guard.
//!
//! # Directions
//!
//! - **Document -> thumb** ([`on_document_scrolled`]): the document reports a
//!   relative scroll; the engine accumulates it and, unless the guard is
//!   held, repositions the thumb.
//! - **Thumb -> document** ([`on_thumb_moved`]): the engine maps the thumb
//!   position to an absolute offset and issues exactly two relative scroll
//!   commands, back to zero and then forward to the target, while holding
//!   the guard.
//!
//! # Invariants
//!
//! 1. The guard is held from before the first scroll command until after the
//!    second returns, and released on every exit path (it is an RAII value).
//! 2. One `on_thumb_moved` issues exactly one pair of commands and never
//!    re-enters itself.
//! 3. Document scroll reports arriving while the guard is held update the
//!    accumulator but never move the thumb.
//! 4. With no document attached every entry point is a no-op.
//!
//! [`on_document_scrolled`]: ScrollSyncEngine::on_document_scrolled
//! [`on_thumb_moved`]: ScrollSyncEngine::on_thumb_moved

use std::cell::Cell;
use std::fmt;

use thumbtrack_core::GeometryError;
use thumbtrack_core::geometry::{Axis, Point, ThumbGeometry};
use thumbtrack_core::{debug, trace, warn};

use crate::document::{DocumentError, DocumentView, ScrollDelta};
use crate::mapper::{CoordinateMapper, DocumentMetrics};

/// What a sync entry point did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncOutcome {
    /// The other side was updated.
    Applied,
    /// The reentrancy guard was held; nothing was propagated.
    Suppressed,
    /// No document is attached.
    Detached,
    /// No layout pass has produced metrics or a track yet.
    Unmeasured,
    /// Content fits the viewport (or the thumb fills the track); there is
    /// nothing to map.
    NoScrollableRange,
}

/// Holds the syncing flag for its lifetime.
struct SyncGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> SyncGuard<'a> {
    /// Take the flag, or `None` if it is already held.
    fn try_acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for SyncGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Keeps thumb position and document offset consistent in both directions.
///
/// One engine per scrollbar; nothing here is shared between instances.
pub struct ScrollSyncEngine {
    axis: Axis,
    document: Option<Box<dyn DocumentView>>,
    metrics: Option<DocumentMetrics>,
    scroll_offset: Point,
    syncing: Cell<bool>,
    commands_issued: u64,
}

impl fmt::Debug for ScrollSyncEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSyncEngine")
            .field("axis", &self.axis)
            .field("attached", &self.document.is_some())
            .field("metrics", &self.metrics)
            .field("scroll_offset", &self.scroll_offset)
            .field("syncing", &self.syncing.get())
            .finish()
    }
}

impl ScrollSyncEngine {
    /// Create a detached engine.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            document: None,
            metrics: None,
            scroll_offset: Point::default(),
            syncing: Cell::new(false),
            commands_issued: 0,
        }
    }

    /// Attach a document, returning the one it replaces.
    ///
    /// The accumulator is seeded from the document's current offset.
    pub fn attach(&mut self, document: Box<dyn DocumentView>) -> Option<Box<dyn DocumentView>> {
        self.scroll_offset = document.scroll_offset();
        debug!(offset = self.axis.along(self.scroll_offset), "document attached");
        self.document.replace(document)
    }

    /// Detach and return the document. Metrics are kept until the next
    /// layout pass replaces them.
    pub fn detach(&mut self) -> Option<Box<dyn DocumentView>> {
        self.scroll_offset = Point::default();
        self.document.take()
    }

    /// Whether a document is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.document.is_some()
    }

    /// The attached document.
    #[must_use]
    pub fn document(&self) -> Option<&dyn DocumentView> {
        self.document.as_deref()
    }

    /// The attached document, mutably.
    ///
    /// Scrolls issued through this reference bypass the engine; report the
    /// delta they return through [`on_document_scrolled`](Self::on_document_scrolled).
    pub fn document_mut(&mut self) -> Option<&mut dyn DocumentView> {
        match &mut self.document {
            Some(document) => Some(document.as_mut()),
            None => None,
        }
    }

    /// Replace the document metrics.
    pub fn set_metrics(&mut self, metrics: DocumentMetrics) {
        self.metrics = Some(metrics);
    }

    /// Latest document metrics.
    #[must_use]
    pub const fn metrics(&self) -> Option<DocumentMetrics> {
        self.metrics
    }

    /// Accumulated document offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    /// Accumulated offset along the scroll axis.
    #[must_use]
    pub const fn offset_along_axis(&self) -> f32 {
        self.axis.along(self.scroll_offset)
    }

    /// Whether a thumb-to-document sync is in progress.
    #[must_use]
    pub fn is_syncing(&self) -> bool {
        self.syncing.get()
    }

    /// Total relative scroll commands issued to documents.
    #[must_use]
    pub const fn commands_issued(&self) -> u64 {
        self.commands_issued
    }

    /// Mapper for the current metrics and thumb, once both are known.
    #[must_use]
    pub fn mapper(&self, thumb: &ThumbGeometry) -> Option<CoordinateMapper> {
        let metrics = self.metrics?;
        let track = thumb.track()?;
        Some(CoordinateMapper::new(metrics, track.length(), thumb.length()))
    }

    /// The document scrolled by `(dx, dy)`.
    ///
    /// Report only scrolls the engine did not issue; the deltas returned by
    /// its own commands are already accumulated.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError`] from positioning the thumb; this cannot
    /// happen once a track is assigned.
    pub fn on_document_scrolled(
        &mut self,
        dx: f32,
        dy: f32,
        thumb: &mut ThumbGeometry,
    ) -> Result<SyncOutcome, GeometryError> {
        if self.document.is_none() {
            return Ok(SyncOutcome::Detached);
        }
        accumulate(&mut self.scroll_offset, ScrollDelta::new(dx, dy));
        if self.syncing.get() {
            trace!(dx, dy, "document scroll during sync, thumb left alone");
            return Ok(SyncOutcome::Suppressed);
        }
        self.sync_thumb(thumb)
    }

    /// Place the thumb where the accumulated offset says it belongs.
    pub fn sync_thumb(&self, thumb: &mut ThumbGeometry) -> Result<SyncOutcome, GeometryError> {
        let Some(mapper) = self.mapper(thumb) else {
            return Ok(SyncOutcome::Unmeasured);
        };
        if !mapper.metrics().is_scrollable() {
            thumb.set_position(0.0)?;
            return Ok(SyncOutcome::NoScrollableRange);
        }
        let position = mapper.scroll_offset_to_thumb_position(self.offset_along_axis());
        thumb.set_position(position)?;
        trace!(position, "thumb follows document");
        Ok(SyncOutcome::Applied)
    }

    /// The thumb moved; scroll the document to match.
    ///
    /// # Errors
    ///
    /// Returns the document's error if either scroll command fails. The
    /// guard is released and any distance the document did move before the
    /// failure stays accumulated. The thumb is left where the gesture put it;
    /// call [`sync_thumb`](Self::sync_thumb) to bring it back in line with
    /// the document.
    pub fn on_thumb_moved(&mut self, thumb: &ThumbGeometry) -> Result<SyncOutcome, DocumentError> {
        if self.document.is_none() {
            return Ok(SyncOutcome::Detached);
        }
        let Some(mapper) = self.mapper(thumb) else {
            return Ok(SyncOutcome::Unmeasured);
        };
        if !mapper.is_mappable() {
            return Ok(SyncOutcome::NoScrollableRange);
        }
        let target = mapper.thumb_position_to_scroll_offset(thumb.position());
        let current = self.offset_along_axis();

        let Some(_guard) = SyncGuard::try_acquire(&self.syncing) else {
            trace!("thumb moved during sync, ignored");
            return Ok(SyncOutcome::Suppressed);
        };
        let Some(document) = self.document.as_mut() else {
            return Ok(SyncOutcome::Detached);
        };

        let (dx, dy) = self.axis.compose(-current);
        let back = issue(document.as_mut(), dx, dy)?;
        accumulate(&mut self.scroll_offset, back);
        self.commands_issued += 1;

        let (dx, dy) = self.axis.compose(target);
        let forward = issue(document.as_mut(), dx, dy)?;
        accumulate(&mut self.scroll_offset, forward);
        self.commands_issued += 1;

        debug!(offset = target, previous = current, "document follows thumb");
        Ok(SyncOutcome::Applied)
    }
}

fn issue(document: &mut dyn DocumentView, dx: f32, dy: f32) -> Result<ScrollDelta, DocumentError> {
    match document.scroll_by(dx, dy) {
        Ok(delta) => Ok(delta),
        Err(err) => {
            warn!(error = %err, dx, dy, "scroll command failed");
            Err(err)
        }
    }
}

fn accumulate(offset: &mut Point, delta: ScrollDelta) {
    *offset = offset.offset(delta.dx, delta.dy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ItemExtentSource, ScrollableDocument};
    use std::cell::RefCell;
    use std::rc::Rc;
    use thumbtrack_core::geometry::Track;

    #[derive(Debug, Default)]
    struct Log {
        offset: f32,
        commands: Vec<(f32, f32)>,
        fail_on: Option<usize>,
    }

    /// Unclamped vertical document that records every command.
    struct RecordingDocument(Rc<RefCell<Log>>);

    impl ScrollableDocument for RecordingDocument {
        fn scroll_offset(&self) -> Point {
            Point::new(0.0, self.0.borrow().offset)
        }
        fn viewport_extent(&self, _axis: Axis) -> f32 {
            1000.0
        }
        fn scroll_by(&mut self, dx: f32, dy: f32) -> Result<ScrollDelta, DocumentError> {
            let mut log = self.0.borrow_mut();
            if log.fail_on == Some(log.commands.len()) {
                return Err(DocumentError::rejected("test failure"));
            }
            log.commands.push((dx, dy));
            log.offset += dy;
            Ok(ScrollDelta::new(dx, dy))
        }
    }

    impl ItemExtentSource for RecordingDocument {
        fn first_visible_item_extent(&self, _axis: Axis) -> Option<f32> {
            Some(50.0)
        }
        fn item_count(&self) -> usize {
            100
        }
    }

    fn engine_with(log: &Rc<RefCell<Log>>) -> ScrollSyncEngine {
        let mut engine = ScrollSyncEngine::new(Axis::Vertical);
        engine.attach(Box::new(RecordingDocument(Rc::clone(log))));
        engine.set_metrics(DocumentMetrics::new(5000.0, 1000.0));
        engine
    }

    fn thumb_at(position: f32) -> ThumbGeometry {
        let mut thumb = ThumbGeometry::new(100.0, 1.0);
        thumb.set_track(Track::from_length(1000.0).unwrap());
        thumb.set_position(position).unwrap();
        thumb
    }

    #[test]
    fn thumb_move_issues_one_pair() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut engine = engine_with(&log);
        let thumb = thumb_at(450.0);

        assert_eq!(engine.on_thumb_moved(&thumb), Ok(SyncOutcome::Applied));
        assert_eq!(log.borrow().commands, vec![(0.0, -0.0), (0.0, 2000.0)]);
        assert_eq!(log.borrow().offset, 2000.0);
        assert_eq!(engine.offset_along_axis(), 2000.0);
        assert_eq!(engine.commands_issued(), 2);
        assert!(!engine.is_syncing());
    }

    #[test]
    fn second_move_scrolls_back_from_accumulated_offset() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut engine = engine_with(&log);
        engine.on_thumb_moved(&thumb_at(450.0)).unwrap();
        engine.on_thumb_moved(&thumb_at(225.0)).unwrap();

        let commands = log.borrow().commands.clone();
        assert_eq!(commands[2..], [(0.0, -2000.0), (0.0, 1000.0)]);
        assert_eq!(engine.offset_along_axis(), 1000.0);
    }

    #[test]
    fn document_scroll_moves_thumb() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut engine = engine_with(&log);
        let mut thumb = thumb_at(0.0);
        let outcome = engine.on_document_scrolled(0.0, 4000.0, &mut thumb).unwrap();
        assert_eq!(outcome, SyncOutcome::Applied);
        assert_eq!(thumb.position(), 900.0);
    }

    #[test]
    fn document_scroll_accumulates() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut engine = engine_with(&log);
        let mut thumb = thumb_at(0.0);
        engine.on_document_scrolled(0.0, 1000.0, &mut thumb).unwrap();
        engine.on_document_scrolled(0.0, 1000.0, &mut thumb).unwrap();
        assert_eq!(engine.offset_along_axis(), 2000.0);
        assert_eq!(thumb.position(), 450.0);
        // Cross-axis motion is tracked but does not move a vertical thumb.
        engine.on_document_scrolled(300.0, 0.0, &mut thumb).unwrap();
        assert_eq!(engine.scroll_offset(), Point::new(300.0, 2000.0));
        assert_eq!(thumb.position(), 450.0);
    }

    #[test]
    fn guard_blocks_thumb_updates() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut engine = engine_with(&log);
        let mut thumb = thumb_at(100.0);

        let guard = SyncGuard::try_acquire(&engine.syncing);
        assert!(guard.is_some());
        std::mem::forget(guard);
        assert!(engine.is_syncing());

        let outcome = engine.on_document_scrolled(0.0, 4000.0, &mut thumb).unwrap();
        assert_eq!(outcome, SyncOutcome::Suppressed);
        assert_eq!(thumb.position(), 100.0);
        assert_eq!(engine.offset_along_axis(), 4000.0);

        assert_eq!(engine.on_thumb_moved(&thumb), Ok(SyncOutcome::Suppressed));
        assert!(log.borrow().commands.is_empty());
    }

    #[test]
    fn guard_is_exclusive_and_released_on_drop() {
        let flag = Cell::new(false);
        {
            let _held = SyncGuard::try_acquire(&flag).unwrap();
            assert!(flag.get());
            assert!(SyncGuard::try_acquire(&flag).is_none());
            assert!(flag.get());
        }
        assert!(!flag.get());
    }

    #[test]
    fn failed_command_releases_guard() {
        let log = Rc::new(RefCell::new(Log {
            fail_on: Some(1),
            ..Log::default()
        }));
        let mut engine = engine_with(&log);
        let result = engine.on_thumb_moved(&thumb_at(450.0));
        assert_eq!(result, Err(DocumentError::rejected("test failure")));
        assert!(!engine.is_syncing());
        assert_eq!(engine.commands_issued(), 1);

        // The next attempt goes through.
        log.borrow_mut().fail_on = None;
        assert_eq!(engine.on_thumb_moved(&thumb_at(450.0)), Ok(SyncOutcome::Applied));
        assert_eq!(log.borrow().offset, 2000.0);
    }

    #[test]
    fn detached_engine_is_a_no_op() {
        let mut engine = ScrollSyncEngine::new(Axis::Vertical);
        engine.set_metrics(DocumentMetrics::new(5000.0, 1000.0));
        let mut thumb = thumb_at(300.0);
        assert_eq!(engine.on_thumb_moved(&thumb), Ok(SyncOutcome::Detached));
        assert_eq!(
            engine.on_document_scrolled(0.0, 100.0, &mut thumb),
            Ok(SyncOutcome::Detached)
        );
        assert_eq!(thumb.position(), 300.0);
        assert_eq!(engine.offset_along_axis(), 0.0);
    }

    #[test]
    fn unmeasured_engine_waits_for_layout() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut engine = ScrollSyncEngine::new(Axis::Vertical);
        engine.attach(Box::new(RecordingDocument(Rc::clone(&log))));
        assert_eq!(engine.on_thumb_moved(&thumb_at(300.0)), Ok(SyncOutcome::Unmeasured));

        engine.set_metrics(DocumentMetrics::new(5000.0, 1000.0));
        let detached_thumb = ThumbGeometry::new(100.0, 1.0);
        assert_eq!(engine.on_thumb_moved(&detached_thumb), Ok(SyncOutcome::Unmeasured));
        assert!(log.borrow().commands.is_empty());
    }

    #[test]
    fn content_that_fits_disables_sync() {
        let log = Rc::new(RefCell::new(Log::default()));
        let mut engine = engine_with(&log);
        engine.set_metrics(DocumentMetrics::new(800.0, 1000.0));
        let mut thumb = thumb_at(300.0);

        assert_eq!(engine.on_thumb_moved(&thumb), Ok(SyncOutcome::NoScrollableRange));
        assert!(log.borrow().commands.is_empty());

        let outcome = engine.on_document_scrolled(0.0, 10.0, &mut thumb).unwrap();
        assert_eq!(outcome, SyncOutcome::NoScrollableRange);
        assert_eq!(thumb.position(), 0.0);
    }

    #[test]
    fn attach_seeds_accumulator_and_returns_previous() {
        let log = Rc::new(RefCell::new(Log {
            offset: 750.0,
            ..Log::default()
        }));
        let mut engine = ScrollSyncEngine::new(Axis::Vertical);
        assert!(engine.attach(Box::new(RecordingDocument(Rc::clone(&log)))).is_none());
        assert_eq!(engine.offset_along_axis(), 750.0);
        assert!(engine.is_attached());

        let other = Rc::new(RefCell::new(Log::default()));
        assert!(engine.attach(Box::new(RecordingDocument(other))).is_some());
        assert_eq!(engine.offset_along_axis(), 0.0);

        assert!(engine.detach().is_some());
        assert!(!engine.is_attached());
        assert!(engine.document().is_none());
    }
}
