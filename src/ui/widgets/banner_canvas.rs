// SPDX-License-Identifier: MPL-2.0
//! Canvas that draws one banner with a zoom/pan transform and reports
//! pointer input (mouse and single touch) relative to its bounds.

use crate::banner::{Banner, Dimensions};
use crate::ui::state::{PointerKind, Transform};
use iced::widget::canvas;
use iced::widget::Action;
use iced::{mouse, touch, Element, Length, Point, Rectangle, Size, Theme};

/// How the image is fitted into the canvas before the transform applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Fill the canvas, cropping the overflow (carousel).
    Cover,
    /// Show the whole image, letterboxed (modal).
    Contain,
}

/// Pointer input in canvas-local coordinates.
///
/// A position is `None` when the event carried no usable coordinates; the
/// receiver treats such events as no-ops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed {
        pointer: PointerKind,
        position: Option<Point>,
    },
    Moved {
        pointer: PointerKind,
        position: Option<Point>,
    },
    Released { pointer: PointerKind },
    /// The mouse left the canvas or a finger was lost.
    Left,
}

/// Cursor shown over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Idle,
    Clickable,
    Grab,
    Grabbing,
}

/// Horizontal slide from the previously shown banner to the current one.
#[derive(Debug, Clone, Copy)]
pub struct Slide<'a> {
    pub outgoing: &'a Banner,
    /// Eased progress in `[0, 1]`.
    pub progress: f32,
    /// Moving to the next slide (content travels right to left).
    pub forward: bool,
}

pub struct BannerCanvas<'a> {
    banner: &'a Banner,
    fit: Fit,
    transform: Transform,
    cursor: Cursor,
    slide: Option<Slide<'a>>,
}

impl<'a> BannerCanvas<'a> {
    #[must_use]
    pub fn new(banner: &'a Banner, fit: Fit) -> Self {
        Self {
            banner,
            fit,
            transform: Transform::IDENTITY,
            cursor: Cursor::Idle,
            slide: None,
        }
    }

    #[must_use]
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    #[must_use]
    pub fn sliding(mut self, slide: Option<Slide<'a>>) -> Self {
        self.slide = slide;
        self
    }

    pub fn view(self) -> Element<'a, PointerEvent> {
        canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn image_rect(&self, banner: &Banner, area: Size, shift: f32) -> Rectangle {
        let rect = transformed_rect(
            fitted_rect(banner.dimensions(), area, self.fit),
            area,
            self.transform,
        );
        Rectangle {
            x: rect.x + shift,
            ..rect
        }
    }
}

/// Per-canvas interaction state kept by iced between events.
#[derive(Debug, Default)]
pub struct Interaction {
    hovered: bool,
}

/// A translated event and whether the canvas owns it.
///
/// Events the canvas does not own are still published so drags and swipes
/// can end, but are left uncaptured for widgets laid out after the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Translated {
    event: PointerEvent,
    capture: bool,
}

impl canvas::Program<PointerEvent> for BannerCanvas<'_> {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<PointerEvent>> {
        let translated = translate_event(event, bounds, cursor, &mut state.hovered)?;
        let action = Action::publish(translated.event);
        Some(if translated.capture {
            action.and_capture()
        } else {
            action
        })
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let area = bounds.size();
        let mut frame = canvas::Frame::new(renderer, area);

        let (incoming_shift, outgoing) = match self.slide {
            Some(slide) => {
                let (incoming, outgoing) = slide_shifts(slide.progress, slide.forward, area.width);
                (incoming, Some((slide.outgoing, outgoing)))
            }
            None => (0.0, None),
        };

        frame.with_clip(Rectangle::with_size(area), |frame| {
            if let Some((banner, shift)) = outgoing {
                frame.draw_image(
                    self.image_rect(banner, area, shift),
                    canvas::Image::new(banner.handle().clone()),
                );
            }
            frame.draw_image(
                self.image_rect(self.banner, area, incoming_shift),
                canvas::Image::new(self.banner.handle().clone()),
            );
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !cursor.is_over(bounds) {
            return mouse::Interaction::default();
        }
        match self.cursor {
            Cursor::Idle => mouse::Interaction::default(),
            Cursor::Clickable => mouse::Interaction::Pointer,
            Cursor::Grab => mouse::Interaction::Grab,
            Cursor::Grabbing => mouse::Interaction::Grabbing,
        }
    }
}

/// Horizontal shifts of the incoming and outgoing banner during a slide.
#[must_use]
pub fn slide_shifts(progress: f32, forward: bool, width: f32) -> (f32, f32) {
    let progress = progress.clamp(0.0, 1.0);
    let direction = if forward { 1.0 } else { -1.0 };
    (
        direction * (1.0 - progress) * width,
        -direction * progress * width,
    )
}

/// Maps a native event to a pointer event, or `None` if it is not ours.
///
/// Only presses, moves and releases over the canvas are captured.
fn translate_event(
    event: &iced::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    hovered: &mut bool,
) -> Option<Translated> {
    let local = |p: Point| Point::new(p.x - bounds.x, p.y - bounds.y);
    let owned = |event| Translated {
        event,
        capture: true,
    };
    let passed = |event| Translated {
        event,
        capture: false,
    };

    match event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let position = cursor.position_in(bounds)?;
            Some(owned(PointerEvent::Pressed {
                pointer: PointerKind::Mouse,
                position: Some(position),
            }))
        }
        iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
            match cursor.position_in(bounds) {
                Some(position) => {
                    *hovered = true;
                    Some(owned(PointerEvent::Moved {
                        pointer: PointerKind::Mouse,
                        position: Some(position),
                    }))
                }
                None if *hovered => {
                    *hovered = false;
                    Some(passed(PointerEvent::Left))
                }
                None => None,
            }
        }
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            let released = PointerEvent::Released {
                pointer: PointerKind::Mouse,
            };
            Some(if cursor.is_over(bounds) {
                owned(released)
            } else {
                passed(released)
            })
        }
        iced::Event::Mouse(mouse::Event::CursorLeft) => {
            std::mem::take(hovered).then_some(passed(PointerEvent::Left))
        }
        iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
            bounds.contains(*position).then(|| {
                owned(PointerEvent::Pressed {
                    pointer: PointerKind::Finger(id.0),
                    position: Some(local(*position)),
                })
            })
        }
        iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
            let pointer = PointerKind::Finger(id.0);
            Some(if bounds.contains(*position) {
                owned(PointerEvent::Moved {
                    pointer,
                    position: Some(local(*position)),
                })
            } else {
                passed(PointerEvent::Moved {
                    pointer,
                    position: None,
                })
            })
        }
        iced::Event::Touch(touch::Event::FingerLifted { id, position }) => {
            let released = PointerEvent::Released {
                pointer: PointerKind::Finger(id.0),
            };
            Some(if bounds.contains(*position) {
                owned(released)
            } else {
                passed(released)
            })
        }
        iced::Event::Touch(touch::Event::FingerLost { .. }) => Some(passed(PointerEvent::Left)),
        _ => None,
    }
}

/// Rectangle the untransformed image occupies inside `area`.
///
/// Without dimensions the image is stretched over the whole area.
#[must_use]
pub fn fitted_rect(dimensions: Option<Dimensions>, area: Size, fit: Fit) -> Rectangle {
    let Some(dims) = dimensions else {
        return Rectangle::with_size(area);
    };
    if area.width <= 0.0 || area.height <= 0.0 {
        return Rectangle::with_size(area);
    }

    let scale_x = area.width / dims.width as f32;
    let scale_y = area.height / dims.height as f32;
    let scale = match fit {
        Fit::Cover => scale_x.max(scale_y),
        Fit::Contain => scale_x.min(scale_y),
    };

    let size = Size::new(dims.width as f32 * scale, dims.height as f32 * scale);
    Rectangle::new(
        Point::new((area.width - size.width) / 2.0, (area.height - size.height) / 2.0),
        size,
    )
}

/// Applies `scale(s) translate(dx, dy)` around the centre of `area`.
///
/// The translation happens before scaling, so it moves the image by
/// `s * offset` on screen.
#[must_use]
pub fn transformed_rect(base: Rectangle, area: Size, transform: Transform) -> Rectangle {
    let origin = Point::new(area.width / 2.0, area.height / 2.0);
    let s = transform.scale;
    let map = |p: Point| {
        Point::new(
            origin.x + (p.x + transform.offset.dx - origin.x) * s,
            origin.y + (p.y + transform.offset.dy - origin.y) * s,
        )
    };
    let top_left = map(base.position());
    Rectangle::new(top_left, Size::new(base.width * s, base.height * s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::state::PanOffset;

    const AREA: Size = Size::new(800.0, 400.0);

    #[test]
    fn contain_letterboxes_wide_area() {
        let rect = fitted_rect(Dimensions::new(400, 400), AREA, Fit::Contain);
        assert_abs_diff_eq!(rect.width, 400.0);
        assert_abs_diff_eq!(rect.height, 400.0);
        assert_abs_diff_eq!(rect.x, 200.0);
        assert_abs_diff_eq!(rect.y, 0.0);
    }

    #[test]
    fn cover_fills_and_crops() {
        let rect = fitted_rect(Dimensions::new(400, 400), AREA, Fit::Cover);
        assert_abs_diff_eq!(rect.width, 800.0);
        assert_abs_diff_eq!(rect.height, 800.0);
        assert_abs_diff_eq!(rect.y, -200.0);
    }

    #[test]
    fn unknown_dimensions_stretch() {
        let rect = fitted_rect(None, AREA, Fit::Contain);
        assert_eq!(rect, Rectangle::with_size(AREA));
    }

    #[test]
    fn identity_transform_keeps_rect() {
        let base = fitted_rect(Dimensions::new(400, 400), AREA, Fit::Contain);
        assert_eq!(transformed_rect(base, AREA, Transform::IDENTITY), base);
    }

    #[test]
    fn scale_is_centred_and_translation_is_scaled() {
        let base = Rectangle::with_size(AREA);
        let rect = transformed_rect(
            base,
            AREA,
            Transform {
                scale: 2.0,
                offset: PanOffset::new(25.0, 0.0),
            },
        );
        assert_abs_diff_eq!(rect.width, 1600.0);
        // Centre moves by scale * dx = 50px.
        assert_abs_diff_eq!(rect.x + rect.width / 2.0, 450.0);
        assert_abs_diff_eq!(rect.y + rect.height / 2.0, 200.0);
    }

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(10.0, 10.0), Size::new(100.0, 100.0))
    }

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn moved_to(x: f32, y: f32) -> iced::Event {
        iced::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    #[test]
    fn press_outside_bounds_is_ignored() {
        let event = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let mut hovered = false;
        assert!(translate_event(&event, bounds(), at(500.0, 500.0), &mut hovered).is_none());

        assert_eq!(
            translate_event(&event, bounds(), at(20.0, 30.0), &mut hovered),
            Some(Translated {
                event: PointerEvent::Pressed {
                    pointer: PointerKind::Mouse,
                    position: Some(Point::new(10.0, 20.0)),
                },
                capture: true,
            })
        );
    }

    #[test]
    fn release_outside_bounds_is_published_but_not_captured() {
        let event = iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let mut hovered = false;

        let outside = translate_event(&event, bounds(), at(500.0, 20.0), &mut hovered);
        assert_eq!(
            outside,
            Some(Translated {
                event: PointerEvent::Released {
                    pointer: PointerKind::Mouse
                },
                capture: false,
            })
        );

        let inside = translate_event(&event, bounds(), at(20.0, 20.0), &mut hovered);
        assert!(inside.is_some_and(|t| t.capture));
    }

    #[test]
    fn cursor_leaving_bounds_reports_left_once() {
        let mut hovered = false;

        let inside = translate_event(&moved_to(50.0, 50.0), bounds(), at(50.0, 50.0), &mut hovered);
        assert!(inside.is_some_and(|t| t.capture));
        assert!(hovered);

        let left = translate_event(&moved_to(150.0, 50.0), bounds(), at(150.0, 50.0), &mut hovered);
        assert_eq!(
            left,
            Some(Translated {
                event: PointerEvent::Left,
                capture: false,
            })
        );

        // Further moves outside the canvas belong to other widgets.
        assert!(
            translate_event(&moved_to(160.0, 50.0), bounds(), at(160.0, 50.0), &mut hovered)
                .is_none()
        );
    }

    #[test]
    fn cursor_leaving_window_only_matters_when_hovered() {
        let event = iced::Event::Mouse(mouse::Event::CursorLeft);
        let mut hovered = false;
        assert!(translate_event(&event, bounds(), mouse::Cursor::Unavailable, &mut hovered).is_none());

        hovered = true;
        assert_eq!(
            translate_event(&event, bounds(), mouse::Cursor::Unavailable, &mut hovered)
                .map(|t| t.event),
            Some(PointerEvent::Left)
        );
        assert!(!hovered);
    }

    #[test]
    fn finger_events_are_local() {
        let bounds = Rectangle::new(Point::new(100.0, 0.0), Size::new(100.0, 100.0));
        let event = iced::Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(7),
            position: Point::new(150.0, 40.0),
        });
        assert_eq!(
            translate_event(&event, bounds, mouse::Cursor::Unavailable, &mut false),
            Some(Translated {
                event: PointerEvent::Moved {
                    pointer: PointerKind::Finger(7),
                    position: Some(Point::new(50.0, 40.0)),
                },
                capture: true,
            })
        );
    }

    #[test]
    fn finger_outside_bounds_is_not_captured() {
        let lifted = iced::Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(2),
            position: Point::new(500.0, 40.0),
        });
        let translated =
            translate_event(&lifted, bounds(), mouse::Cursor::Unavailable, &mut false);
        assert_eq!(translated.map(|t| t.capture), Some(false));
    }

    #[test]
    fn slide_moves_both_banners_by_one_width() {
        let (incoming, outgoing) = slide_shifts(0.0, true, 800.0);
        assert_abs_diff_eq!(incoming, 800.0);
        assert_abs_diff_eq!(outgoing, 0.0);

        let (incoming, outgoing) = slide_shifts(0.25, false, 800.0);
        assert_abs_diff_eq!(incoming, -600.0);
        assert_abs_diff_eq!(outgoing, 200.0);

        let (incoming, outgoing) = slide_shifts(1.0, true, 800.0);
        assert_abs_diff_eq!(incoming, 0.0);
        assert_abs_diff_eq!(outgoing, -800.0);
    }
}
