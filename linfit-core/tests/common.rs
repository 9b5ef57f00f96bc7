use linfit_core::Matrix;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Seeded so every run draws the same matrices.
#[allow(dead_code)]
pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// Helper to draw a matrix with entries in [-10, 10).
#[allow(dead_code)]
pub(crate) fn random_matrix<const R: usize, const C: usize>(rng: &mut StdRng) -> Matrix<R, C> {
    Matrix::rand_uniform(rng, -10.0, 10.0).expect("Test matrix creation failed")
}
