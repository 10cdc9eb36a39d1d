use std::collections::HashSet;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use viewer_core::{CameraPlan, PuzzleData};

use crate::registry;
use crate::utils::{set_fill_style, set_stroke_style};

const BG_CAPTURE: &str = "#ffffff";
const BG_INTERACTIVE: &str = "#f5f5f5";
const EDGE_COLOR: &str = "#333";

// Per-face brightness approximating the fixed light rig: strong key light
// from above, weaker fill from the sides and below.
const SHADE_POS_Y: f64 = 1.0;
const SHADE_NEG_Y: f64 = 0.55;
const SHADE_POS_X: f64 = 0.85;
const SHADE_NEG_X: f64 = 0.62;
const SHADE_POS_Z: f64 = 0.92;
const SHADE_NEG_Z: f64 = 0.68;

const ORBIT_SPEED: f64 = 0.01;

/// Camera orbiting the puzzle center. Seeded from a deterministic plan;
/// dragging changes azimuth and elevation only, never distance or target,
/// so the framing stays comparable to the planned one.
pub struct Camera {
    radius: f64,
    azimuth: f64,
    polar: f64,
    fov_deg: f64,
}

impl Camera {
    pub fn from_plan(plan: &CameraPlan) -> Self {
        let [x, y, z] = plan.position;
        let radius = (x * x + y * y + z * z).sqrt().max(1e-6);
        Camera {
            radius,
            azimuth: z.atan2(x),
            polar: (y / radius).acos(),
            fov_deg: plan.fov_deg,
        }
    }

    pub fn orbit(&mut self, dx: f64, dy: f64) {
        self.azimuth += dx * ORBIT_SPEED;
        self.polar = (self.polar - dy * ORBIT_SPEED).clamp(0.1, std::f64::consts::PI - 0.1);
    }

    /// Position relative to the orbit target.
    fn eye_offset(&self) -> [f64; 3] {
        [
            self.radius * self.polar.sin() * self.azimuth.cos(),
            self.radius * self.polar.cos(),
            self.radius * self.polar.sin() * self.azimuth.sin(),
        ]
    }
}

/// Render the resolved scene: every cell whose piece is not hidden becomes
/// a unit cube, painter-sorted back to front.
pub fn render(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    data: &PuzzleData,
    hidden: &HashSet<String>,
    capture: bool,
    camera: &Camera,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    set_fill_style(ctx, if capture { BG_CAPTURE } else { BG_INTERACTIVE });
    ctx.fill_rect(0.0, 0.0, width, height);

    let center = [
        data.grid.x as f64 / 2.0,
        data.grid.y as f64 / 2.0,
        data.grid.z as f64 / 2.0,
    ];
    let offset = camera.eye_offset();
    let eye = [
        center[0] + offset[0],
        center[1] + offset[1],
        center[2] + offset[2],
    ];
    let forward = normalize(sub(center, eye));
    let right = normalize(cross(forward, [0.0, 1.0, 0.0]));
    let up = cross(right, forward);
    let focal = (height / 2.0) / (camera.fov_deg.to_radians() / 2.0).tan();
    let view = View {
        eye,
        right,
        up,
        forward,
        half_w: width / 2.0,
        half_h: height / 2.0,
        focal,
    };

    let mut cubes: Vec<(usize, f64)> = data
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| !hidden.contains(&cell.piece))
        .map(|(i, cell)| {
            let p = [
                cell.x as f64 + 0.5,
                cell.y as f64 + 0.5,
                cell.z as f64 + 0.5,
            ];
            (i, dist_sq(p, eye))
        })
        .collect();
    cubes.sort_by(|a, b| b.1.total_cmp(&a.1));

    ctx.set_line_width(1.0);
    for (i, _) in cubes {
        let cell = &data.cells[i];
        let color = registry::piece_color(&cell.piece);
        draw_cube(ctx, &view, cell.x as f64, cell.y as f64, cell.z as f64, &color);
    }
}

struct View {
    eye: [f64; 3],
    right: [f64; 3],
    up: [f64; 3],
    forward: [f64; 3],
    half_w: f64,
    half_h: f64,
    focal: f64,
}

// Corner index i encodes its offsets bitwise: (i&1, i>>1&1, i>>2&1).
// Each face lists its corner cycle, outward normal and shade factor.
const FACES: [([usize; 4], [f64; 3], f64); 6] = [
    ([1, 3, 7, 5], [1.0, 0.0, 0.0], SHADE_POS_X),
    ([0, 2, 6, 4], [-1.0, 0.0, 0.0], SHADE_NEG_X),
    ([2, 3, 7, 6], [0.0, 1.0, 0.0], SHADE_POS_Y),
    ([0, 1, 5, 4], [0.0, -1.0, 0.0], SHADE_NEG_Y),
    ([4, 5, 7, 6], [0.0, 0.0, 1.0], SHADE_POS_Z),
    ([0, 1, 3, 2], [0.0, 0.0, -1.0], SHADE_NEG_Z),
];

fn draw_cube(ctx: &CanvasRenderingContext2d, view: &View, x: f64, y: f64, z: f64, color: &str) {
    let mut corners = [[0.0f64; 3]; 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        *corner = [
            x + (i & 1) as f64,
            y + ((i >> 1) & 1) as f64,
            z + ((i >> 2) & 1) as f64,
        ];
    }

    for (cycle, normal, shade) in FACES.iter() {
        let face_center = avg4(
            corners[cycle[0]],
            corners[cycle[1]],
            corners[cycle[2]],
            corners[cycle[3]],
        );
        if dot(*normal, sub(face_center, view.eye)) >= 0.0 {
            continue; // back face
        }
        let mut points = [(0.0f64, 0.0f64); 4];
        let mut visible = true;
        for (slot, &idx) in points.iter_mut().zip(cycle.iter()) {
            match project(view, corners[idx]) {
                Some(p) => *slot = p,
                None => {
                    visible = false;
                    break;
                }
            }
        }
        if !visible {
            continue;
        }
        ctx.begin_path();
        ctx.move_to(points[0].0, points[0].1);
        for p in &points[1..] {
            ctx.line_to(p.0, p.1);
        }
        ctx.close_path();
        set_fill_style(ctx, &shade_color(color, *shade));
        ctx.fill();
        set_stroke_style(ctx, EDGE_COLOR);
        ctx.stroke();
    }
}

fn project(view: &View, p: [f64; 3]) -> Option<(f64, f64)> {
    let v = sub(p, view.eye);
    let depth = dot(v, view.forward);
    if depth <= 1e-6 {
        return None;
    }
    Some((
        view.half_w + view.focal * dot(v, view.right) / depth,
        view.half_h - view.focal * dot(v, view.up) / depth,
    ))
}

/// Scale a `#rrggbb` color by a brightness factor. Non-hex colors pass
/// through unshaded so named CSS colors still render.
fn shade_color(color: &str, factor: f64) -> String {
    let Some(hex) = color.strip_prefix('#') else {
        return color.to_string();
    };
    if hex.len() != 6 {
        return color.to_string();
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map(|c| ((c as f64 * factor).round().clamp(0.0, 255.0)) as u8)
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        _ => color.to_string(),
    }
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f64; 3]) -> [f64; 3] {
    let len = dot(v, v).sqrt().max(1e-12);
    [v[0] / len, v[1] / len, v[2] / len]
}

fn dist_sq(a: [f64; 3], b: [f64; 3]) -> f64 {
    let d = sub(a, b);
    dot(d, d)
}

fn avg4(a: [f64; 3], b: [f64; 3], c: [f64; 3], d: [f64; 3]) -> [f64; 3] {
    [
        (a[0] + b[0] + c[0] + d[0]) / 4.0,
        (a[1] + b[1] + c[1] + d[1]) / 4.0,
        (a[2] + b[2] + c[2] + d[2]) / 4.0,
    ]
}
