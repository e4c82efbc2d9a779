pub mod balls_vis2d;
