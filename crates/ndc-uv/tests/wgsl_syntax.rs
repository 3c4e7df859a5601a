use naga::front::wgsl::parse_str;
use naga::valid::{Capabilities, ValidationFlags, Validator};
use naga::{Module, Scalar, TypeInner, VectorSize};

use ndc_uv::shader::{compose, HELPERS_WGSL, NORMALIZE_UV_WGSL, VIEWPORT_UNIFORM_WGSL};
use ndc_uv::{normalize_uv, Vec2};

const FRAGMENT_BODY: &str = r#"
@group(0) @binding(0) var<uniform> viewport: ViewportUniform;

@fragment
fn fs_main(@builtin(position) frag: vec4<f32>) -> @location(0) vec4<f32> {
    let uv = normalize_uv(frag.xy, viewport.size);
    let inside = step(length(uv), 1.0);
    return vec4<f32>(vec3<f32>(inside), 1.0);
}
"#;

fn validate(name: &str, source: &str) -> Module {
    let module = parse_str(source).unwrap_or_else(|err| panic!("{name} failed to parse: {err}"));
    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .unwrap_or_else(|err| panic!("{name} failed validation: {err:?}"));
    module
}

fn is_vec2_f32(module: &Module, ty: naga::Handle<naga::Type>) -> bool {
    matches!(
        module.types[ty].inner,
        TypeInner::Vector { size: VectorSize::Bi, scalar: Scalar::F32 }
    )
}

// ── parse + validate ──────────────────────────────────────────────────────

#[test]
fn helpers_parse_and_validate() {
    validate("helpers", HELPERS_WGSL);
    validate("viewport uniform", VIEWPORT_UNIFORM_WGSL);
    validate("normalize_uv", NORMALIZE_UV_WGSL);
}

#[test]
fn composed_fragment_shader_validates() {
    validate("fragment", &compose(FRAGMENT_BODY));
}

#[test]
fn body_without_helpers_does_not_parse() {
    assert!(parse_str(FRAGMENT_BODY).is_err());
}

#[test]
fn body_mentioning_helper_in_comment_validates() {
    let body = format!("// delegates to fn normalize_uv(position, size)\n{FRAGMENT_BODY}");
    validate("commented fragment", &compose(&body));
}

#[test]
fn body_declaring_own_uniform_validates() {
    let body = format!(
        "struct ViewportUniform {{\n    size: vec2<f32>,\n    _pad: vec2<f32>,\n}}\n{FRAGMENT_BODY}"
    );
    validate("fragment with local uniform", &compose(&body));
}

// ── parity with coords::normalize_uv ──────────────────────────────────────

#[test]
fn wgsl_signature_is_vec2_in_vec2_out() {
    let module = validate("normalize_uv", NORMALIZE_UV_WGSL);
    let (_, func) = module
        .functions
        .iter()
        .find(|(_, f)| f.name.as_deref() == Some("normalize_uv"))
        .expect("normalize_uv is defined");

    let names: Vec<_> = func.arguments.iter().map(|a| a.name.as_deref()).collect();
    assert_eq!(names, [Some("position"), Some("size")]);
    assert!(func.arguments.iter().all(|a| is_vec2_f32(&module, a.ty)));

    let result = func.result.as_ref().expect("normalize_uv returns a value");
    assert!(is_vec2_f32(&module, result.ty));
}

#[test]
fn wgsl_steps_match_cpu_order() {
    // The same three steps as coords::normalize_uv, in the same order.
    let steps: Vec<&str> = NORMALIZE_UV_WGSL
        .lines()
        .map(str::trim)
        .skip_while(|l| !l.starts_with("fn normalize_uv("))
        .skip(1)
        .take_while(|l| *l != "}")
        .filter(|l| !l.is_empty())
        .collect();

    assert_eq!(
        steps,
        [
            "var uv = position / size;",
            "uv = uv * 2.0 - 1.0;",
            "uv.x *= size.x / size.y;",
            "return uv;",
        ]
    );
}

#[test]
fn cpu_transform_follows_the_same_steps() {
    let position = Vec2::new(123.0, 456.0);
    let size = Vec2::new(1920.0, 1080.0);

    let mut uv = position / size;
    uv = uv * 2.0 - Vec2::splat(1.0);
    uv.x *= size.x / size.y;

    assert_eq!(normalize_uv(position, size), uv);
}
