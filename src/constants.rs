// Constants module for portal-notifications
// Centralizes magic numbers for better maintainability

// ============================================================================
// UI Layout Constants
// ============================================================================

/// Width of notification cards in pixels
pub(crate) const CARD_WIDTH: f32 = 340.0;

/// Padding inside notification cards
pub(crate) const CARD_PADDING: u16 = 12;

/// Corner radius of notification cards
pub(crate) const CARD_RADIUS: f32 = 8.0;

/// Border width of outlined cards
pub(crate) const CARD_BORDER_WIDTH: f32 = 1.5;

/// Gap between cards of one stack
pub(crate) const STACK_SPACING: u16 = 8;

/// Margin between the stacks and the window edge
pub(crate) const SURFACE_MARGIN: u16 = 16;

// ============================================================================
// Icon Size Constants
// ============================================================================

/// Severity icon next to the message
pub(crate) const ICON_SIZE: u16 = 20;

/// Dismiss control
pub(crate) const ICON_SIZE_SMALL: u16 = 16;

// ============================================================================
// Elevation Constants
// ============================================================================

/// Shadow blur per elevation step
pub(crate) const SHADOW_BLUR_PER_LEVEL: f32 = 2.0;

/// Vertical shadow offset per elevation step
pub(crate) const SHADOW_OFFSET_PER_LEVEL: f32 = 0.5;
