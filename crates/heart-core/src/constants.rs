// Shared tuning constants used by both web and native frontends.

// Scene
pub const CLEAR_COLOR_HEX: u32 = 0x0a0a0a;
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const TONE_MAPPING_EXPOSURE: f32 = 1.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z_DEFAULT: f32 = 6.0;
pub const CAMERA_Z_MIN: f32 = 2.0;
pub const CAMERA_Z_MAX: f32 = 15.0;
pub const ZOOM_PER_WHEEL_UNIT: f32 = 0.001; // 0.1 zoom speed * 0.01 wheel scale

// Heart outline: start point followed by cubic segments (ctrl1, ctrl2, to)
pub const HEART_OUTLINE_START: [f32; 2] = [5.0, 5.0];
pub const HEART_OUTLINE_CUBICS: [[[f32; 2]; 3]; 6] = [
    [[5.0, 5.0], [4.0, 0.0], [0.0, 0.0]],
    [[-6.0, 0.0], [-6.0, 3.5], [-6.0, 3.5]],
    [[-6.0, 5.5], [-4.0, 7.7], [5.0, 9.5]],
    [[14.0, 7.7], [16.0, 5.5], [16.0, 3.5]],
    [[16.0, 3.5], [16.0, 0.0], [10.0, 0.0]],
    [[7.0, 0.0], [5.0, 5.0], [5.0, 5.0]],
];
pub const CURVE_SEGMENTS: usize = 12; // samples per cubic segment

// Extrusion
pub const EXTRUDE_DEPTH: f32 = 2.0;
pub const EXTRUDE_STEPS: usize = 2;
pub const BEVEL_SEGMENTS: usize = 8;
pub const BEVEL_SIZE: f32 = 0.5;
pub const BEVEL_THICKNESS: f32 = 0.3;
pub const BEVEL_MITER_LIMIT_SQ: f32 = 2.0; // squared length cap of a unit edge shift

// Heart transform and material
pub const HEART_BASE_SCALE: f32 = 0.3;
pub const HEART_COLOR_HEX: u32 = 0xff1744;
pub const HEART_EMISSIVE_HEX: u32 = 0x220011;
pub const HEART_EMISSIVE_INTENSITY: f32 = 0.2;
pub const HEART_SHININESS: f32 = 100.0;
pub const HEART_SPECULAR_HEX: u32 = 0x111111; // Phong default

// Particles
pub const PARTICLE_COUNT: usize = 800;
pub const PARTICLE_RADIUS_MIN: f32 = 3.0;
pub const PARTICLE_RADIUS_MAX: f32 = 15.0;
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_MAX: f32 = 2.5;
pub const PARTICLE_GREEN_SPAN: f32 = 0.4; // pink tint reach on green
pub const PARTICLE_BLUE_SPAN: f32 = 0.6; // pink tint reach on blue
pub const PARTICLE_POINT_SIZE: f32 = 0.1; // world units at size 1.0
pub const PARTICLE_OPACITY: f32 = 0.7;

// Input
pub const DRAG_THRESHOLD: f32 = 3.0; // pointer units on either axis
pub const DRAG_SENSITIVITY: f32 = 0.01; // radians per pointer unit

// Animation
pub const TIME_STEP: f32 = 0.016; // nominal seconds per refresh, scaled by speed
pub const ROTATION_SMOOTHING: f32 = 0.05;
pub const AUTO_ROTATE_STEP: f32 = 0.005;
pub const PULSE_FREQUENCY: f32 = 3.0;
pub const PULSE_AMPLITUDE: f32 = 0.15;
pub const HUE_FREQUENCY: f32 = 0.8;
pub const HUE_BASE: f32 = 0.98;
pub const HUE_SPAN: f32 = 0.08;
pub const HUE_SATURATION: f32 = 0.9;
pub const HUE_LIGHTNESS_BASE: f32 = 0.5;
pub const HUE_LIGHTNESS_SPAN: f32 = 0.2;
pub const CLOUD_SPIN_RATE: f32 = 0.1; // y rotation per unit time
pub const CLOUD_WOBBLE_FREQUENCY: f32 = 0.5;
pub const CLOUD_WOBBLE_AMPLITUDE: f32 = 0.1;
pub const SHIMMER_PHASE_STEP: f32 = 0.1;
pub const SHIMMER_Y_FREQUENCY: f32 = 2.0;
pub const SHIMMER_Y_AMPLITUDE: f32 = 0.002;
pub const SHIMMER_X_FREQUENCY: f32 = 1.5;
pub const SHIMMER_X_AMPLITUDE: f32 = 0.001;

// Speed control surface
pub const SPEED_MIN: f32 = 0.1;
pub const SPEED_MAX: f32 = 3.0;
pub const SPEED_STEP: f32 = 0.1;
pub const SPEED_DEFAULT: f32 = 1.0;

// Click bounce
pub const BOUNCE_FACTOR: f32 = 1.2;
pub const BOUNCE_RESTORE_MS: u32 = 200;

// Lights: (hex color, intensity, position, range)
pub const AMBIENT_LIGHT: (u32, f32) = (0x404040, 0.4);
pub const DIRECTIONAL_LIGHT: (u32, f32, [f32; 3]) = (0xff6b9d, 1.2, [5.0, 5.0, 5.0]);
pub const POINT_LIGHTS: [(u32, f32, [f32; 3], f32); 2] = [
    (0xff1744, 1.5, [3.0, 2.0, 4.0], 15.0),
    (0x4db6e6, 1.0, [-3.0, -2.0, 3.0], 12.0),
];

// Overlay messaging link
pub const MESSAGE_PHONE_NUMBER: &str = "7990469514";
pub const MESSAGE_TEXT: &str = "Jaa maaf kiya tu bhi kya yaad rakhega 😏";
pub const MESSAGE_BASE_URL: &str = "https://wa.me/";
