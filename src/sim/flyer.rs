//! Shared capability of everything that moves, collides and can die

use glam::Vec2;

pub trait Flyer {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn radius(&self) -> f32;
    fn is_alive(&self) -> bool;
    fn kill(&mut self);
}
