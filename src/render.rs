//! Canvas2D painter for engine frames.

use crate::constants::*;
use crate::palette::{hsla, rgba, tinted};
use glam::Vec2;
use morph_core::{Body, Glow, Influenced, Look, Spark, Sprite, TrailSegment};
use std::f64::consts::TAU;
use web_sys as web;

pub fn paint(ctx: &web::CanvasRenderingContext2d, frame: &morph_core::Frame, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    if frame.sprites.is_empty() {
        return;
    }
    ctx.save();
    _ = ctx.translate(width / 2.0, height / 2.0);
    _ = ctx.scale(frame.scale as f64, frame.scale as f64);
    for sprite in &frame.sprites {
        match &sprite.look {
            Look::Plain => {
                dot(ctx, sprite.pos, sprite.r as f64);
                ctx.set_fill_style_str(PARTICLE_FILL);
                ctx.fill();
            }
            Look::Influenced(look) => influenced(ctx, sprite, look),
        }
    }
    ctx.restore();
}

#[inline]
fn dot(ctx: &web::CanvasRenderingContext2d, at: Vec2, r: f64) {
    ctx.begin_path();
    _ = ctx.arc(at.x as f64, at.y as f64, r, 0.0, TAU);
}

fn influenced(ctx: &web::CanvasRenderingContext2d, sprite: &Sprite, look: &Influenced) {
    let r = sprite.r as f64;
    if let Some(glow) = &look.glow {
        paint_glow(ctx, sprite.pos, glow);
    }

    ctx.save();
    _ = ctx.translate(sprite.pos.x as f64, sprite.pos.y as f64);
    _ = ctx.rotate(look.angle as f64);
    match &look.body {
        Body::Round { blue } => {
            dot(ctx, Vec2::ZERO, r);
            ctx.set_fill_style_str(&tinted(*blue));
            ctx.fill();
        }
        Body::Stretched {
            rgb,
            alpha,
            trails,
            sparks,
        } => {
            let stretch = look.stretch as f64;
            _ = ctx.scale(stretch, 1.0 / stretch.sqrt());
            dot(ctx, Vec2::ZERO, r);
            ctx.set_fill_style_str(&rgba(*rgb, *alpha));
            ctx.fill();
            for seg in trails {
                paint_trail(ctx, seg);
            }
            for spark in sparks {
                paint_spark(ctx, spark);
            }
        }
    }
    ctx.restore();
}

fn paint_glow(ctx: &web::CanvasRenderingContext2d, at: Vec2, glow: &Glow) {
    let (x, y, radius) = (at.x as f64, at.y as f64, glow.radius as f64);
    let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
        return;
    };
    for (offset, hue_shift, lightness, alpha_share) in GLOW_STOPS {
        _ = gradient.add_color_stop(
            offset,
            &hsla(glow.hue + hue_shift, 100.0, lightness, glow.intensity * alpha_share),
        );
    }
    ctx.save();
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(x - radius, y - radius, radius * 2.0, radius * 2.0);
    ctx.restore();
}

fn paint_trail(ctx: &web::CanvasRenderingContext2d, seg: &TrailSegment) {
    let head = seg.offset as f64;
    let tail = head - seg.length as f64;
    let half_width = seg.half_width as f64;
    let gradient = ctx.create_linear_gradient(tail, 0.0, head, 0.0);
    _ = gradient.add_color_stop(0.0, &rgba(TRAIL_TAIL_RGB, 0.0));
    _ = gradient.add_color_stop(
        TRAIL_MID_STOP,
        &rgba(TRAIL_MID_RGB, seg.opacity * TRAIL_MID_ALPHA),
    );
    _ = gradient.add_color_stop(1.0, &rgba(TRAIL_HEAD_RGB, seg.opacity));
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.move_to(head, 0.0);
    ctx.line_to(tail, half_width);
    ctx.line_to(tail, -half_width);
    ctx.close_path();
    ctx.fill();
}

fn paint_spark(ctx: &web::CanvasRenderingContext2d, spark: &Spark) {
    let size = spark.size as f64;
    let glow_r = size * SPARK_GLOW_SCALE;
    ctx.save();
    _ = ctx.rotate(spark.angle as f64);
    _ = ctx.translate(-(spark.distance as f64), 0.0);
    if let Ok(gradient) = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, glow_r) {
        _ = gradient.add_color_stop(0.0, &rgba(SPARK_GLOW_RGB, spark.alpha));
        _ = gradient.add_color_stop(1.0, &rgba(SPARK_EDGE_RGB, 0.0));
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(-glow_r, -glow_r, glow_r * 2.0, glow_r * 2.0);
    }
    dot(ctx, Vec2::ZERO, size);
    ctx.set_fill_style_str(SPARK_CORE_FILL);
    ctx.fill();
    ctx.restore();
}
