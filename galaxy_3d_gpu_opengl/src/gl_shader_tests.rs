//! Unit tests for shader compilation

use crate::gl_shader::*;
use crate::mock_gl::{LogCapture, RecordingGl};
use galaxy_3d_gpu::galaxy3d::gpu::{ShaderDesc, ShaderStage};
use galaxy_3d_gpu::galaxy3d::log::LogSeverity;
use galaxy_3d_gpu::galaxy3d::Error;
use serial_test::serial;

const VERTEX: &[u8] = b"// vert\n#version 460\nvoid main() { gl_Position = vec4(0.0); }\n";
const FRAGMENT: &[u8] = b"// frag\n#version 460\nout vec4 color;\nvoid main() { color = vec4(1.0); }\n";

fn labelled(label: &str) -> ShaderDesc {
    ShaderDesc { label: Some(label.to_string()) }
}

// ============================================================================
// COMPILATION
// ============================================================================

#[test]
fn test_stage_selects_shader_kind() {
    let gl = RecordingGl::new();

    let vs = create_shader(&gl, &ShaderDesc::default(), VERTEX).unwrap();
    let fs = create_shader(&gl, &ShaderDesc::default(), FRAGMENT).unwrap();

    assert_eq!(vs.stage(), ShaderStage::Vertex);
    assert_eq!(fs.stage(), ShaderStage::Fragment);
    let calls = gl.calls();
    assert!(calls.contains(&format!("glCreateShader({}) -> 1", glow::VERTEX_SHADER)));
    assert!(calls.contains(&format!("glCreateShader({}) -> 2", glow::FRAGMENT_SHADER)));
    assert!(calls.contains(&format!("glShaderSource(1, {} bytes)", VERTEX.len())));
    assert_eq!(gl.count("glCompileShader"), 2);
}

#[test]
fn test_label_wraps_creation_in_debug_group() {
    let gl = RecordingGl::new();
    create_shader(&gl, &labelled("sky.vert"), VERTEX).unwrap();

    let calls = gl.calls();
    assert_eq!(calls.first().unwrap(), "glPushDebugGroup(\"create shader: sky.vert\")");
    assert_eq!(calls.last().unwrap(), "glPopDebugGroup()");
    assert!(calls.contains(&format!("glObjectLabel({}, 1, \"sky.vert\")", glow::SHADER)));
}

#[test]
fn test_unlabelled_shader_pushes_no_group() {
    let gl = RecordingGl::new();
    create_shader(&gl, &ShaderDesc::default(), VERTEX).unwrap();

    assert_eq!(gl.count("glPushDebugGroup"), 0);
    assert_eq!(gl.count("glPopDebugGroup"), 0);
    assert_eq!(gl.count("glObjectLabel"), 0);
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_compile_failure_deletes_shader_and_pops_group() {
    let gl = RecordingGl::new();
    gl.set_compile_fails(true);

    let result = create_shader(&gl, &labelled("broken"), FRAGMENT);

    assert!(matches!(result, Err(Error::BackendError(_))));
    let calls = gl.calls();
    assert!(calls.contains(&"glDeleteShader(1)".to_string()));
    assert_eq!(calls.last().unwrap(), "glPopDebugGroup()");
    assert_eq!(gl.count("glPushDebugGroup"), gl.count("glPopDebugGroup"));
}

#[test]
fn test_malformed_source_is_rejected_before_native_creation() {
    let gl = RecordingGl::new();

    let result = create_shader(&gl, &labelled("bad"), b"#version 460\nvoid main() {}");

    assert!(matches!(result, Err(Error::InvalidResource(_))));
    assert_eq!(gl.count("glCreateShader"), 0);
    assert_eq!(gl.count("glPushDebugGroup"), gl.count("glPopDebugGroup"));
}

#[test]
fn test_zero_handle_is_a_backend_error() {
    let gl = RecordingGl::new();
    gl.fail_create("glCreateShader");

    assert!(matches!(create_shader(&gl, &ShaderDesc::default(), VERTEX), Err(Error::BackendError(_))));
    assert_eq!(gl.count("glCompileShader"), 0);
}

#[test]
#[serial]
fn test_compile_log_is_reported() {
    let capture = LogCapture::install();
    let gl = RecordingGl::new();
    gl.set_info_log("0:3: warning: unused variable");

    create_shader(&gl, &labelled("noisy"), VERTEX).unwrap();

    let info = capture.messages(LogSeverity::Info);
    assert!(info.iter().any(|m| m.contains("noisy") && m.contains("unused variable")));
}

#[test]
fn test_destroy_is_idempotent() {
    let gl = RecordingGl::new();
    let mut shader = create_shader(&gl, &ShaderDesc::default(), VERTEX).unwrap();
    gl.clear();

    destroy_shader(&gl, &mut shader);
    destroy_shader(&gl, &mut shader);

    assert_eq!(gl.calls(), vec!["glDeleteShader(1)".to_string()]);
}
