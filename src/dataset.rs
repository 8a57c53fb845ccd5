//! Bundled dataset: the public matrix, the known plaintext prefix and the
//! encrypted message

use crate::linalg::{Matrix3, Vector3};

/// Public forward transform
pub const FORWARD_MATRIX: Matrix3 = Matrix3::new([
    [47.0, -77.0, -85.0],
    [-49.0, 78.0, 50.0],
    [57.0, -78.0, 99.0],
]);

/// Characters the message is known to start with
pub const EXPECTED_PREFIX: [char; 3] = ['H', 'T', 'B'];

/// Encrypted message, one vector per character
pub const ENCRYPTED_MESSAGE: [Vector3; 47] = [
    Vector3::new(-981.0, 1395.0, -1668.0),
    Vector3::new(6934.0, -10059.0, 4270.0),
    Vector3::new(3871.0, -5475.0, 3976.0),
    Vector3::new(4462.0, -7368.0, -8954.0),
    Vector3::new(2794.0, -4413.0, -3461.0),
    Vector3::new(5175.0, -7518.0, 3201.0),
    Vector3::new(3102.0, -5051.0, -5457.0),
    Vector3::new(7255.0, -10884.0, -266.0),
    Vector3::new(5694.0, -8016.0, 6237.0),
    Vector3::new(4160.0, -6038.0, 2582.0),
    Vector3::new(4940.0, -7069.0, 3770.0),
    Vector3::new(3185.0, -5158.0, -4939.0),
    Vector3::new(7669.0, -11686.0, -2231.0),
    Vector3::new(5601.0, -9013.0, -7971.0),
    Vector3::new(5600.0, -8355.0, 575.0),
    Vector3::new(1739.0, -2838.0, -3037.0),
    Vector3::new(2572.0, -4120.0, -3788.0),
    Vector3::new(8055.0, -11985.0, 1137.0),
    Vector3::new(7088.0, -10247.0, 5141.0),
    Vector3::new(8384.0, -12679.0, -1381.0),
    Vector3::new(-785.0, 1095.0, -1841.0),
    Vector3::new(4250.0, -6762.0, -5242.0),
    Vector3::new(3716.0, -5364.0, 2126.0),
    Vector3::new(5673.0, -7968.0, 6741.0),
    Vector3::new(5877.0, -9190.0, -4803.0),
    Vector3::new(5639.0, -8865.0, -5356.0),
    Vector3::new(1980.0, -3230.0, -3366.0),
    Vector3::new(6183.0, -9334.0, -1002.0),
    Vector3::new(2575.0, -4068.0, -2828.0),
    Vector3::new(7521.0, -11374.0, -1137.0),
    Vector3::new(5639.0, -8551.0, -1501.0),
    Vector3::new(4194.0, -6039.0, 3213.0),
    Vector3::new(2072.0, -3025.0, 383.0),
    Vector3::new(2444.0, -3699.0, -502.0),
    Vector3::new(6313.0, -9653.0, -2447.0),
    Vector3::new(4502.0, -7090.0, -4435.0),
    Vector3::new(-421.0, 894.0, 2912.0),
    Vector3::new(4667.0, -7142.0, -2266.0),
    Vector3::new(4228.0, -6616.0, -3749.0),
    Vector3::new(6258.0, -9719.0, -4407.0),
    Vector3::new(6044.0, -9561.0, -6463.0),
    Vector3::new(266.0, -423.0, -637.0),
    Vector3::new(3849.0, -6223.0, -5988.0),
    Vector3::new(5809.0, -9021.0, -4115.0),
    Vector3::new(4794.0, -7128.0, 918.0),
    Vector3::new(6340.0, -9442.0, 892.0),
    Vector3::new(5322.0, -8614.0, -8334.0),
];
