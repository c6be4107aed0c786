pub mod approx_eq;

pub mod primitive {
    pub mod matrix;
    pub mod matrix2;
    pub mod matrix3;
    pub mod point;
    pub mod tuple;
    pub mod vector;
}

pub mod render {
    pub mod camera;
    pub mod canvas;
    pub mod color;
    pub mod intersection;
    pub mod light;
    pub mod material;
    pub mod object;
    pub mod pattern;
    pub mod ray;
    pub mod world;
}

pub mod scenes;
