
use second_order_pairs::Pipeline;

fn main() {
    Pipeline::run();
}
