//! WGSL sources for the two vertex stages and the shared fragment stage.
//!
//! Bind group 0 layout shared by all three modules:
//! binding 0 = [`super::frame::FrameUniformsGpu`],
//! binding 1 = [`crate::grass::GrassParams`] (grass vertex stage only),
//! binding 2 = [`crate::shading::LightingUniform`] (fragment stage only).

pub const GRASS_WGSL: &str = include_str!("../../shaders/grass.wgsl");
pub const STATIC_WGSL: &str = include_str!("../../shaders/static.wgsl");
pub const BLINN_PHONG_WGSL: &str = include_str!("../../shaders/blinn_phong.wgsl");

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

pub const FRAME_BINDING: u32 = 0;
pub const GRASS_PARAMS_BINDING: u32 = 1;
pub const LIGHTING_BINDING: u32 = 2;

/// One of the bundled shader modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderKind {
    Grass,
    Static,
    BlinnPhong,
}

impl ShaderKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Grass => "Grass Vertex Shader",
            Self::Static => "Static Vertex Shader",
            Self::BlinnPhong => "Blinn-Phong Fragment Shader",
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            Self::Grass => GRASS_WGSL,
            Self::Static => STATIC_WGSL,
            Self::BlinnPhong => BLINN_PHONG_WGSL,
        }
    }

    pub fn entry_point(self) -> &'static str {
        match self {
            Self::Grass | Self::Static => VERTEX_ENTRY,
            Self::BlinnPhong => FRAGMENT_ENTRY,
        }
    }

    /// Descriptor ready for `Device::create_shader_module`.
    pub fn descriptor(self) -> wgpu::ShaderModuleDescriptor<'static> {
        wgpu::ShaderModuleDescriptor {
            label: Some(self.label()),
            source: wgpu::ShaderSource::Wgsl(self.source().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ShaderKind; 3] = [ShaderKind::Grass, ShaderKind::Static, ShaderKind::BlinnPhong];

    /// Parse and fully validate a bundled module.
    fn compile(kind: ShaderKind) -> naga::Module {
        let module = naga::front::wgsl::parse_str(kind.source())
            .unwrap_or_else(|e| panic!("{kind:?}: {}", e.emit_to_string(kind.source())));
        naga::valid::Validator::new(naga::valid::ValidationFlags::all(), naga::valid::Capabilities::all())
            .validate(&module)
            .unwrap_or_else(|e| panic!("{kind:?}: {e:?}"));
        module
    }

    fn struct_span(module: &naga::Module, name: &str) -> Option<u32> {
        module.types.iter().find_map(|(_, ty)| match &ty.inner {
            naga::TypeInner::Struct { span, .. } if ty.name.as_deref() == Some(name) => Some(*span),
            _ => None,
        })
    }

    fn member_offset(module: &naga::Module, ty_name: &str, member: &str) -> Option<u32> {
        module.types.iter().find_map(|(_, ty)| match &ty.inner {
            naga::TypeInner::Struct { members, .. } if ty.name.as_deref() == Some(ty_name) => members
                .iter()
                .find(|m| m.name.as_deref() == Some(member))
                .map(|m| m.offset),
            _ => None,
        })
    }

    fn uniform_binding(module: &naga::Module, name: &str) -> Option<(u32, u32)> {
        module.global_variables.iter().find_map(|(_, var)| {
            let binding = var.binding.as_ref()?;
            (var.name.as_deref() == Some(name) && var.space == naga::AddressSpace::Uniform)
                .then_some((binding.group, binding.binding))
        })
    }

    fn u32_constant(module: &naga::Module, name: &str) -> Option<u32> {
        module.constants.iter().find_map(|(_, c)| {
            if c.name.as_deref() != Some(name) {
                return None;
            }
            match module.global_expressions[c.init] {
                naga::Expression::Literal(naga::Literal::U32(v)) => Some(v),
                _ => None,
            }
        })
    }

    #[test]
    fn test_modules_validate() {
        for kind in ALL {
            compile(kind);
        }
    }

    #[test]
    fn test_entry_points_present() {
        for kind in ALL {
            let module = compile(kind);
            let stage = match kind {
                ShaderKind::BlinnPhong => naga::ShaderStage::Fragment,
                _ => naga::ShaderStage::Vertex,
            };
            assert!(
                module.entry_points.iter().any(|ep| ep.name == kind.entry_point() && ep.stage == stage),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn test_bindings_match_layout() {
        for kind in ALL {
            assert_eq!(uniform_binding(&compile(kind), "frame"), Some((0, FRAME_BINDING)), "{kind:?}");
        }
        assert_eq!(uniform_binding(&compile(ShaderKind::Grass), "params"), Some((0, GRASS_PARAMS_BINDING)));
        assert_eq!(uniform_binding(&compile(ShaderKind::BlinnPhong), "lighting"), Some((0, LIGHTING_BINDING)));
    }

    #[test]
    fn test_uniform_layouts_match_pod_structs() {
        use crate::grass::GrassParams;
        use crate::render::frame::FrameUniformsGpu;
        use crate::shading::LightingUniform;
        use std::mem::{offset_of, size_of};

        for kind in ALL {
            let module = compile(kind);
            assert_eq!(struct_span(&module, "FrameUniforms"), Some(size_of::<FrameUniformsGpu>() as u32));
            assert_eq!(member_offset(&module, "FrameUniforms", "time"), Some(offset_of!(FrameUniformsGpu, time) as u32));
        }

        let grass = compile(ShaderKind::Grass);
        assert_eq!(struct_span(&grass, "GrassParams"), Some(size_of::<GrassParams>() as u32));
        for (wgsl, offset) in [
            ("avoidance_anchor", offset_of!(GrassParams, avoidance_anchor)),
            ("avoidance_bend", offset_of!(GrassParams, avoidance_bend)),
            ("yaw_jitter", offset_of!(GrassParams, yaw_jitter)),
            ("root_color", offset_of!(GrassParams, root_color)),
            ("tip_color", offset_of!(GrassParams, tip_color)),
        ] {
            assert_eq!(member_offset(&grass, "GrassParams", wgsl), Some(offset as u32), "{wgsl}");
        }

        let lit = compile(ShaderKind::BlinnPhong);
        assert_eq!(struct_span(&lit, "Lighting"), Some(size_of::<LightingUniform>() as u32));
        assert_eq!(member_offset(&lit, "Lighting", "shininess"), Some(offset_of!(LightingUniform, shininess) as u32));
    }

    #[test]
    fn test_hash_constants_match_cpu() {
        let grass = compile(ShaderKind::Grass);
        assert_eq!(u32_constant(&grass, "PCG_MUL"), Some(crate::wind::hash::PCG_MUL));
        assert_eq!(u32_constant(&grass, "PCG_INC"), Some(crate::wind::hash::PCG_INC));
    }

    #[test]
    fn test_vertex_locations_match_layouts() {
        for loc in 0..=2 {
            assert!(GRASS_WGSL.contains(&format!("@location({loc})")));
        }
        for loc in 5..=8 {
            assert!(GRASS_WGSL.contains(&format!("@location({loc}) model_")));
            assert!(STATIC_WGSL.contains(&format!("@location({loc}) model_")));
        }
        assert!(STATIC_WGSL.contains("@location(9) color"));
    }

    #[test]
    fn test_descriptor() {
        let desc = ShaderKind::Grass.descriptor();
        assert_eq!(desc.label, Some("Grass Vertex Shader"));
    }
}
