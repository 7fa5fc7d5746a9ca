//! Unit tests for shader stage detection

use crate::error::Error;
use crate::gpu::ShaderStage;

#[test]
fn test_detect_vertex_marker() {
    let src = b"// vert\n#version 460 core\nvoid main() { gl_Position = vec4(0.0); }";
    assert_eq!(ShaderStage::detect(src).unwrap(), ShaderStage::Vertex);
}

#[test]
fn test_detect_fragment_marker() {
    let src = b"// fragment shader\n#version 460 core\n";
    assert_eq!(ShaderStage::detect(src).unwrap(), ShaderStage::Fragment);
}

#[test]
fn test_detect_rejects_missing_marker() {
    let src = b"#version 460 core\nvoid main() {}";
    match ShaderStage::detect(src) {
        Err(Error::InvalidResource(msg)) => assert!(msg.contains("malformed")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_detect_rejects_short_input() {
    assert!(ShaderStage::detect(b"// ve").is_err());
    assert!(ShaderStage::detect(b"").is_err());
}
