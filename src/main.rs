fn main() {
    bevy_boss_rush::game::run();
}
