//! ASCII spinning-torus renderer.
//!
//! Z-buffered projection of a torus rotating around two axes, shaded
//! with a luminance ramp. Math is table-driven trig plus soft-float
//! multiplies; the per-point work is the frame pacing on a soft core.

use core::fmt::Write;

use super::trig;

const WIDTH: usize = 80;
const HEIGHT: usize = 24;
const FRAMES: usize = 64;

/// Shade ramp from dark to bright.
const LUMINANCE: &[u8; 12] = b".,-~:;=!*#$@";

/// Render a fixed number of frames of the spinning torus.
pub fn donut(out: &mut dyn Write) {
    // Depth and character buffers for one frame.
    let mut depth = [0f32; WIDTH * HEIGHT];
    let mut text = [b' '; WIDTH * HEIGHT];

    // Rotation angles around the two axes, as table indices.
    let mut a: u8 = 0;
    let mut b: u8 = 0;

    let _ = out.write_str("\x1b[2J");

    for _ in 0..FRAMES {
        text.fill(b' ');
        depth.fill(0.0);

        let (sin_a, cos_a) = (trig::sin(a), trig::cos(a));
        let (sin_b, cos_b) = (trig::sin(b), trig::cos(b));

        // theta sweeps the tube cross-section, phi sweeps around the
        // torus center; step sizes keep the surface dense enough at
        // this resolution.
        let mut theta: u8 = 0;
        loop {
            let (sin_t, cos_t) = (trig::sin(theta), trig::cos(theta));

            // Cross-section circle: tube radius 1 around ring radius 2.
            let circle_x = 2.0 + cos_t;
            let circle_y = sin_t;

            let mut phi: u8 = 0;
            loop {
                let (sin_p, cos_p) = (trig::sin(phi), trig::cos(phi));

                let x =
                    circle_x * (cos_b * cos_p + sin_a * sin_b * sin_p) - circle_y * cos_a * sin_b;
                let y =
                    circle_x * (sin_b * cos_p - sin_a * cos_b * sin_p) + circle_y * cos_a * cos_b;
                let z = 5.0 + cos_a * circle_x * sin_p + circle_y * sin_a;
                let ooz = 1.0 / z;

                let col = (40.0 + 30.0 * ooz * x) as i32;
                let row = (12.0 - 15.0 * ooz * y) as i32;

                // Surface luminance from the normal against the light
                // direction; non-positive faces away.
                let lum = cos_p * cos_t * sin_b - cos_a * cos_t * sin_p - sin_a * sin_t
                    + cos_b * (cos_a * sin_t - cos_t * sin_a * sin_p);

                if lum > 0.0
                    && (0..WIDTH as i32).contains(&col)
                    && (0..HEIGHT as i32).contains(&row)
                {
                    let cell = col as usize + WIDTH * row as usize;
                    if ooz > depth[cell] {
                        depth[cell] = ooz;
                        let shade = ((lum * 8.0) as usize).min(LUMINANCE.len() - 1);
                        text[cell] = LUMINANCE[shade];
                    }
                }

                phi = phi.wrapping_add(2);
                if phi == 0 {
                    break;
                }
            }

            theta = theta.wrapping_add(4);
            if theta == 0 {
                break;
            }
        }

        let _ = out.write_str("\x1b[H");
        for row in text.chunks(WIDTH) {
            let _ = out.write_str(core::str::from_utf8(row).unwrap_or(""));
            let _ = out.write_str("\r\n");
        }

        a = a.wrapping_add(2);
        b = b.wrapping_add(1);
    }

    let _ = out.write_str("\n");
}
