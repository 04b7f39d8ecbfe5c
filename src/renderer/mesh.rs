use std::fmt;

/// The primitive shapes the scene is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Plane,
    Box,
    Prism,
    Cylinder,
    TaperedCylinder,
    Cone,
    Sphere,
    Torus,
}

impl MeshKind {
    pub const ALL: [MeshKind; 8] = [
        MeshKind::Plane,
        MeshKind::Box,
        MeshKind::Prism,
        MeshKind::Cylinder,
        MeshKind::TaperedCylinder,
        MeshKind::Cone,
        MeshKind::Sphere,
        MeshKind::Torus,
    ];
}

impl fmt::Display for MeshKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeshKind::Plane => "plane",
            MeshKind::Box => "box",
            MeshKind::Prism => "prism",
            MeshKind::Cylinder => "cylinder",
            MeshKind::TaperedCylinder => "tapered cylinder",
            MeshKind::Cone => "cone",
            MeshKind::Sphere => "sphere",
            MeshKind::Torus => "torus",
        };
        f.write_str(name)
    }
}
