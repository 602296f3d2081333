use rocket::http::Status;

pub trait OrStatus<T> {
    fn or_status(self, status: Status) -> Result<T, Status>;

    fn or_500(self) -> Result<T, Status>
    where
        Self: Sized,
    {
        self.or_status(Status::InternalServerError)
    }
}

impl <T, E> OrStatus<T> for Result<T, E> {
    fn or_status(self, status: Status) -> Result<T, Status> {
        self.map_err(|_| status)
    }
}
