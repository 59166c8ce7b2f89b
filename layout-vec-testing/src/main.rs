use layout_vec::{AsRecord, ElementRef, SoaVec};

#[cfg(test)]
mod tests;

#[derive(AsRecord, Debug, Clone, PartialEq)]
struct Particle {
    position: [f32; 3],
    velocity: [f32; 3],
    mass: f32,
}

fn main() {
    let soa: SoaVec<_> = (0..4u8)
        .map(|i| {
            let x = f32::from(i);
            Particle {
                position: [x, 0., 0.],
                velocity: [0., x, 0.],
                mass: 1. + x,
            }
            .into_record()
        })
        .collect();
    let heaviest: Particle = soa.idx(soa.len() - 1).cloned_as();
    println!("{heaviest:?}");
    println!("{:?}", soa.column::<2>());
}
