//! The theme toggle screen
//!
//! A declarative element tree rebuilt every frame from the animator:
//!
//! ```text
//! root (background)
//! ├── status_bar
//! ├── label ("LIGHT" / "DARK", text color)
//! └── circle (circle color)
//!     └── switch
//! ```
//!
//! Layout and painting belong to the platform renderer; this module only
//! decides what each element looks like.

use crate::error::{AppError, Result};
use crate::headless_assert::{DiagnosticsElement, DiagnosticsSnapshot};
use dusk_animation::{AnimationScheduler, SharedScheduler, Spring, SpringConfig, SpringId};
use dusk_core::Color;
use dusk_theme::{AnimatorConfig, StatusBarStyle, SwitchColors, Theme, ThemeAnimator};

/// Circle diameter as a fraction of the viewport width
pub const CIRCLE_WIDTH_RATIO: f32 = 0.7;

pub const ROOT_ID: &str = "root";
pub const STATUS_BAR_ID: &str = "status_bar";
pub const LABEL_ID: &str = "label";
pub const CIRCLE_ID: &str = "circle";
pub const SWITCH_ID: &str = "switch";

/// Logical screen size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(AppError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
        }
    }
}

/// Input coming from the switch widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchEvent {
    /// The switch moved to the given position
    ValueChanged(bool),
}

/// Typography of the theme label
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStyle {
    pub font_size: f32,
    pub font_weight: u16,
    pub letter_spacing: f32,
    pub margin_bottom: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 70.0,
            font_weight: 700,
            letter_spacing: 14.0,
            margin_bottom: 35.0,
        }
    }
}

/// Drop shadow under the circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub radius: f32,
    pub opacity: f32,
    pub color: Color,
    /// Android-style elevation
    pub elevation: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 20.0,
            radius: 10.0,
            opacity: 0.1,
            color: Color::from_rgba8(255, 50, 50, 0.5),
            elevation: 8.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Full-screen, children centered
    Container,
    StatusBar {
        style: StatusBarStyle,
    },
    Text {
        content: String,
        style: LabelStyle,
    },
    Circle {
        diameter: f32,
        corner_radius: f32,
        shadow: Shadow,
    },
    Switch {
        value: bool,
        track: Color,
        thumb: Color,
        /// 0.0 = off edge, 1.0 = on edge
        thumb_position: f32,
    },
}

/// One element of the rendered tree
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: &'static str,
    pub kind: NodeKind,
    /// Background fill, or glyph color for text
    pub fill: Color,
    pub children: Vec<Node>,
}

impl Node {
    fn new(id: &'static str, kind: NodeKind, fill: Color) -> Self {
        Self {
            id,
            kind,
            fill,
            children: Vec::new(),
        }
    }

    fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Depth-first search by id
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    fn collect_into(&self, snapshot: &mut DiagnosticsSnapshot) {
        snapshot.elements.insert(
            self.id.to_string(),
            DiagnosticsElement {
                text: self.text().map(str::to_string),
                fill: Some(self.fill),
            },
        );
        for child in &self.children {
            child.collect_into(snapshot);
        }
    }
}

/// Owns the animator, the switch thumb animation and the frame clock state
pub struct ThemeScreen {
    scheduler: SharedScheduler,
    animator: ThemeAnimator,
    thumb: SpringId,
    viewport: Viewport,
    switch_colors: SwitchColors,
    label_style: LabelStyle,
    shadow: Shadow,
    frame_count: u64,
}

impl ThemeScreen {
    pub fn new(viewport: Viewport, config: AnimatorConfig) -> Self {
        let scheduler = AnimationScheduler::shared();
        let animator = ThemeAnimator::with_scheduler(scheduler.clone(), config);

        let thumb = scheduler.borrow_mut().add_spring(Spring::new(
            SpringConfig::snappy(),
            switch_position(config.initial.is_dark()),
        ));

        let handle = scheduler.clone();
        animator.subscribe(move |theme: &Theme| {
            let target = switch_position(theme.is_dark());
            handle
                .borrow_mut()
                .with_spring_mut(thumb, |spring| spring.set_target(target));
        });

        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            theme = %config.initial,
            "theme screen created"
        );

        Self {
            scheduler,
            animator,
            thumb,
            viewport,
            switch_colors: SwitchColors::default(),
            label_style: LabelStyle::default(),
            shadow: Shadow::default(),
            frame_count: 0,
        }
    }

    pub fn animator(&self) -> &ThemeAnimator {
        &self.animator
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Feed a switch event. Returns `true` if the theme changed.
    pub fn handle(&mut self, event: SwitchEvent) -> bool {
        match event {
            SwitchEvent::ValueChanged(on) => {
                let changed = self.animator.set_theme(Theme::from_switch(on));
                tracing::debug!(on, changed, "switch value changed");
                changed
            }
        }
    }

    /// Advance every animation by `dt` seconds. Returns `true` while anything
    /// on screen is still moving.
    pub fn frame(&mut self, dt: f32) -> bool {
        self.frame_count += 1;
        self.scheduler.borrow_mut().tick(dt);
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.borrow().has_active_animations()
    }

    /// Build the element tree for the current frame
    pub fn render(&self) -> Node {
        let theme = self.animator.theme();
        let colors = self.animator.current_colors();
        let status_bar = self.animator.status_bar();
        let on = self.animator.switch_value();
        let diameter = self.viewport.width * CIRCLE_WIDTH_RATIO;

        let thumb_position = self
            .scheduler
            .borrow()
            .get_spring(self.thumb)
            .map(Spring::value)
            .unwrap_or_else(|| switch_position(on));

        Node::new(ROOT_ID, NodeKind::Container, colors.background)
            .child(Node::new(
                STATUS_BAR_ID,
                NodeKind::StatusBar {
                    style: status_bar.style,
                },
                status_bar.background,
            ))
            .child(Node::new(
                LABEL_ID,
                NodeKind::Text {
                    content: theme.label().to_string(),
                    style: self.label_style,
                },
                colors.text,
            ))
            .child(
                Node::new(
                    CIRCLE_ID,
                    NodeKind::Circle {
                        diameter,
                        corner_radius: diameter / 2.0,
                        shadow: self.shadow,
                    },
                    colors.circle,
                )
                .child(Node::new(
                    SWITCH_ID,
                    NodeKind::Switch {
                        value: on,
                        track: self.switch_colors.track(on),
                        thumb: self.switch_colors.thumb,
                        thumb_position,
                    },
                    self.switch_colors.track(on),
                )),
            )
    }

    /// Observable state for headless assertions
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        let mut snapshot = DiagnosticsSnapshot {
            theme: Some(self.animator.theme()),
            progress: Some(self.animator.progress()),
            animating: self.is_animating(),
            ..Default::default()
        };
        self.render().collect_into(&mut snapshot);
        snapshot
    }
}

fn switch_position(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dusk_theme::Palette;

    const FRAME: f32 = 1.0 / 60.0;

    fn screen() -> ThemeScreen {
        ThemeScreen::new(Viewport::default(), AnimatorConfig::default())
    }

    fn run_until_idle(screen: &mut ThemeScreen) {
        let mut frames = 0;
        while screen.frame(FRAME) {
            frames += 1;
            assert!(frames < 2_000);
        }
    }

    #[test]
    fn test_initial_tree() {
        let screen = screen();
        let root = screen.render();

        assert_eq!(root.id, ROOT_ID);
        assert_eq!(root.fill, Palette::light().background);
        assert_eq!(root.find(LABEL_ID).and_then(Node::text), Some("LIGHT"));
        assert_eq!(
            root.find(LABEL_ID).map(|n| n.fill),
            Some(Palette::light().text)
        );

        let circle = root.find(CIRCLE_ID).unwrap();
        assert_eq!(circle.fill, Palette::light().circle);
        match &circle.kind {
            NodeKind::Circle {
                diameter,
                corner_radius,
                ..
            } => {
                assert!((diameter - 273.0).abs() < 1e-3);
                assert!((corner_radius - 136.5).abs() < 1e-3);
            }
            other => panic!("unexpected kind {other:?}"),
        }

        // switch lives inside the circle
        assert!(circle.find(SWITCH_ID).is_some());
    }

    #[test]
    fn test_switch_event_flips_label_immediately() {
        let mut screen = screen();
        assert!(screen.handle(SwitchEvent::ValueChanged(true)));
        assert!(!screen.handle(SwitchEvent::ValueChanged(true)));

        let root = screen.render();
        assert_eq!(root.find(LABEL_ID).and_then(Node::text), Some("DARK"));
        // colors have not moved yet
        assert_eq!(root.fill, Palette::light().background);

        match &root.find(STATUS_BAR_ID).unwrap().kind {
            NodeKind::StatusBar { style } => assert_eq!(*style, StatusBarStyle::LightContent),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_frames_animate_to_dark() {
        let mut screen = screen();
        screen.handle(SwitchEvent::ValueChanged(true));
        run_until_idle(&mut screen);

        let root = screen.render();
        assert_eq!(root.fill, Palette::dark().background);
        assert_eq!(root.find(CIRCLE_ID).unwrap().fill, Palette::dark().circle);
        assert_eq!(root.find(LABEL_ID).unwrap().fill, Palette::dark().text);

        match &root.find(SWITCH_ID).unwrap().kind {
            NodeKind::Switch {
                value,
                thumb_position,
                ..
            } => {
                assert!(*value);
                assert_eq!(*thumb_position, 1.0);
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_contains_every_element() {
        let screen = screen();
        let snapshot = screen.snapshot();
        for id in [ROOT_ID, STATUS_BAR_ID, LABEL_ID, CIRCLE_ID, SWITCH_ID] {
            assert!(snapshot.elements.contains_key(id), "missing {id}");
        }
        assert_eq!(snapshot.theme, Some(Theme::Light));
        assert_eq!(snapshot.progress, Some(0.0));
        assert!(!snapshot.animating);
    }

    #[test]
    fn test_viewport_validation() {
        assert!(Viewport::new(390.0, 844.0).is_ok());
        assert!(matches!(
            Viewport::new(0.0, 844.0),
            Err(AppError::InvalidViewport { .. })
        ));
        assert!(Viewport::new(f32::NAN, 1.0).is_err());
    }
}
