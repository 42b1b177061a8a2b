//! Canvas surface and device setup

use web_sys::HtmlCanvasElement;
use wgpu::*;

/// Device, queue and a configured canvas surface
pub struct Gpu {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub format: TextureFormat,
}

/// Prefer an sRGB format so the scene tints come out as written
fn pick_format(formats: &[TextureFormat]) -> Result<TextureFormat, String> {
    formats
        .iter()
        .copied()
        .find(TextureFormat::is_srgb)
        .or_else(|| formats.first().copied())
        .ok_or_else(|| "Canvas offers no surface formats".to_string())
}

pub async fn connect(canvas: HtmlCanvasElement) -> Result<Gpu, String> {
    let (width, height) = (canvas.width(), canvas.height());
    if width == 0 || height == 0 {
        return Err(format!("Canvas has no area ({}x{})", width, height));
    }

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Failed to create surface: {:?}", e))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            compatible_surface: Some(&surface),
            ..Default::default()
        })
        .await
        .ok_or_else(|| "No WebGPU adapter for this canvas".to_string())?;

    // Flat-colour quads need nothing beyond the baseline limits
    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Runner Device"),
                required_limits: Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            },
            None,
        )
        .await
        .map_err(|e| format!("Failed to create device: {:?}", e))?;

    let format = pick_format(&surface.get_capabilities(&adapter).formats)?;
    surface.configure(
        &device,
        &SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: PresentMode::Fifo,
            alpha_mode: CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        },
    );

    Ok(Gpu {
        device,
        queue,
        surface,
        format,
    })
}
