//! Safe-area anchor mapper.
//!
//! Keeps a target rectangle-transform's anchors equal to the screen's safe
//! area, normalized against the display resolution.
//!
//! ## Re-entrancy
//!
//! Writing anchors moves the target, which makes the host report a
//! dimensions change, which calls back into the mapper. The loop ends
//! because [`SafeAreaMapper::recompute`] is a no-op while the reported safe
//! area equals the last one applied. That comparison must stay exact.

use safezone_shared::Rect;

use crate::anchors::{anchors_for, Anchors};
use crate::config::SafeAreaConfig;
use crate::error::{SafeAreaError, SafeAreaResult};
use crate::platform::ScreenProvider;
use crate::tree::{LayoutTree, NodeId};

/// Lifecycle of a mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapperState {
    /// No safe area applied yet.
    #[default]
    Uninitialized,
    /// The last-applied rectangle holds the most recent mapping.
    Tracking,
}

/// Result of a single mapping pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MappingOutcome {
    /// Anchors were written to the target.
    Applied(Anchors),
    /// The safe area matched the last applied one; nothing was written.
    Unchanged,
    /// The platform is filtered out by configuration.
    Ignored,
}

impl MappingOutcome {
    /// Returns true if anchors were written.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Counters for mapping passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapperStats {
    /// Passes that wrote anchors.
    pub applied: u64,
    /// Passes skipped because the safe area was unchanged.
    pub skipped: u64,
}

/// Maps the platform safe area onto a target node's anchors.
#[derive(Debug)]
pub struct SafeAreaMapper<S> {
    screen: S,
    config: SafeAreaConfig,
    owner: NodeId,
    target: Option<NodeId>,
    last_applied: Rect,
    state: MapperState,
    enabled: bool,
    stats: MapperStats,
}

impl<S: ScreenProvider> SafeAreaMapper<S> {
    /// Creates a mapper attached to `owner`, driving `target`.
    ///
    /// Nothing is mapped until [`SafeAreaMapper::on_attach`] runs.
    #[must_use]
    pub fn new(screen: S, config: SafeAreaConfig, owner: NodeId, target: Option<NodeId>) -> Self {
        Self {
            screen,
            config,
            owner,
            target,
            last_applied: Rect::ZERO,
            state: MapperState::Uninitialized,
            enabled: true,
            stats: MapperStats::default(),
        }
    }

    /// Activation hook: one unconditional mapping pass.
    ///
    /// # Errors
    ///
    /// Same as [`SafeAreaMapper::recompute`].
    pub fn on_attach(&mut self, tree: &mut LayoutTree) -> SafeAreaResult<MappingOutcome> {
        self.recompute(tree)
    }

    /// Applies the current safe area to the target, unless it is the one
    /// already applied.
    ///
    /// # Errors
    ///
    /// Returns [`SafeAreaError::MissingTarget`] if no target is assigned and
    /// [`SafeAreaError::UnknownNode`] if the target or owner is not in
    /// `tree`. State is untouched on error.
    pub fn recompute(&mut self, tree: &mut LayoutTree) -> SafeAreaResult<MappingOutcome> {
        if !self.is_supported() {
            return Ok(MappingOutcome::Ignored);
        }

        let target = self.target.ok_or(SafeAreaError::MissingTarget)?;
        if !tree.contains(target) {
            return Err(SafeAreaError::UnknownNode(target));
        }
        let owner_name = tree
            .name(self.owner)
            .ok_or(SafeAreaError::UnknownNode(self.owner))?;

        let safe_area = self.screen.safe_area();
        let resolution = self.config.environment.effective_resolution(&self.screen);

        if safe_area == self.last_applied {
            self.stats.skipped += 1;
            return Ok(MappingOutcome::Unchanged);
        }
        self.last_applied = safe_area;
        self.state = MapperState::Tracking;

        tracing::info!(
            "SafeAreaMapper.recompute {}, safe_area: {}, screen: {}, res: {}",
            owner_name,
            safe_area,
            self.screen.window_size(),
            resolution
        );

        let anchors = anchors_for(safe_area, resolution);
        tree.set_anchors(target, anchors)?;
        self.stats.applied += 1;

        Ok(MappingOutcome::Applied(anchors))
    }

    /// Reassigns the target node.
    ///
    /// With `force_update`, the last-applied rectangle is reset to zero and
    /// one mapping pass runs immediately; its outcome is returned. Without
    /// it, nothing else changes and `None` is returned.
    ///
    /// # Errors
    ///
    /// Same as [`SafeAreaMapper::recompute`] when `force_update` is set.
    pub fn set_target(
        &mut self,
        tree: &mut LayoutTree,
        target: Option<NodeId>,
        force_update: bool,
    ) -> SafeAreaResult<Option<MappingOutcome>> {
        self.target = target;

        if !force_update {
            return Ok(None);
        }
        self.last_applied = Rect::ZERO;
        self.recompute(tree).map(Some)
    }

    /// Dimensions-changed hook, called by the host whenever the target's
    /// rect moves or resizes.
    ///
    /// Runs one mapping pass if the owner is active and the mapper is
    /// enabled; returns `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SafeAreaError::UnknownNode`] if the owner is not in `tree`,
    /// plus anything [`SafeAreaMapper::recompute`] returns.
    pub fn on_target_dimensions_changed(
        &mut self,
        tree: &mut LayoutTree,
    ) -> SafeAreaResult<Option<MappingOutcome>> {
        if !self.is_supported() {
            return Ok(None);
        }

        let active = tree
            .is_active(self.owner)
            .ok_or(SafeAreaError::UnknownNode(self.owner))?;
        if !(active && self.enabled) {
            return Ok(None);
        }

        tracing::debug!(
            "SafeAreaMapper.on_target_dimensions_changed {}",
            tree.name(self.owner).unwrap_or_default()
        );
        self.recompute(tree).map(Some)
    }

    /// Returns true if `node` is the current target.
    #[must_use]
    pub fn watches(&self, node: NodeId) -> bool {
        self.target == Some(node)
    }

    /// Returns true unless the platform is filtered out by `mobile_only`.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !self.config.mobile_only || self.screen.platform().is_mobile()
    }

    /// Enables or disables the mapper's reaction to dimension changes.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the mapper reacts to dimension changes.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the node this mapper is attached to.
    #[must_use]
    pub const fn owner(&self) -> NodeId {
        self.owner
    }

    /// Returns the current target.
    #[must_use]
    pub const fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// Returns the last applied safe area (zero before the first pass).
    #[must_use]
    pub const fn last_applied(&self) -> Rect {
        self.last_applied
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> MapperState {
        self.state
    }

    /// Returns pass counters.
    #[must_use]
    pub const fn stats(&self) -> MapperStats {
        self.stats
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SafeAreaConfig {
        &self.config
    }

    /// Returns the screen provider.
    #[must_use]
    pub const fn screen(&self) -> &S {
        &self.screen
    }
}
